//! paywire-core: the raw-backed model framework under the paywire client.
//!
//! Every model and parameter object stores its fields in a [`RawBag`], an
//! ordered map keyed by wire name. Typed access goes through the
//! [`accessor`] functions, which decode lazily and report precisely which
//! field failed. Server enumerations use [`OpenEnum`] so unknown values
//! survive decoding.
//!
//! The crate has no transport: [`Params`] yields a url, headers and a body,
//! and models decode from whatever JSON the caller received.

pub mod accessor;
pub mod config;
pub mod error;
pub mod model;
pub mod open_enum;
pub mod params;
pub mod path;
pub mod query;
pub mod raw;
pub mod wire;

pub use accessor::{NullPolicy, Slot};
pub use config::{ClientOptions, Environment};
pub use error::{ConfigError, FieldError, RequestError};
pub use model::{RawBacked, Validate};
pub use open_enum::{OpenEnum, WireEnum};
pub use params::{Method, Params, ParamsBags, RequestParts};
pub use raw::{RawBag, RawView};

// Used by the exported macros.
pub use serde;
pub use serde_json;
