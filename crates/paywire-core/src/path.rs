//! Path templates such as `/customers/{customer_id}`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::RequestError;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Splits a template into literal runs and `{name}` placeholders. An
/// unmatched `{` is kept as literal text.
fn pieces(template: &str) -> Vec<Piece<'_>> {
    let mut out = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(len) = rest[open + 1..].find('}') else {
            break;
        };
        if open > 0 {
            out.push(Piece::Literal(&rest[..open]));
        }
        out.push(Piece::Placeholder(&rest[open + 1..open + 1 + len]));
        rest = &rest[open + len + 2..];
    }
    if !rest.is_empty() {
        out.push(Piece::Literal(rest));
    }
    out
}

/// Names of the placeholders in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    pieces(template)
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Placeholder(name) => Some(name),
            Piece::Literal(_) => None,
        })
        .collect()
}

/// Substitutes every `{name}` with its percent-encoded value.
///
/// `.` and `..` are rejected: url parsing collapses them as dot segments
/// (escaped or not), which would retarget the request.
pub fn render(template: &str, params: &[(&str, String)]) -> Result<String, RequestError> {
    let mut out = String::with_capacity(template.len());
    for piece in pieces(template) {
        match piece {
            Piece::Literal(text) => out.push_str(text),
            Piece::Placeholder(name) => {
                let (_, value) = params.iter().find(|(key, _)| *key == name).ok_or_else(|| {
                    RequestError::MissingPathParam {
                        template: template.to_string(),
                        name: name.to_string(),
                    }
                })?;
                if value == "." || value == ".." {
                    return Err(RequestError::DotSegmentPathParam {
                        name: name.to_string(),
                        value: value.clone(),
                    });
                }
                out.extend(utf8_percent_encode(value, SEGMENT));
            }
        }
    }
    Ok(out)
}
