//! paywire: typed models and request parameters for the payments API.
//!
//! ```
//! use paywire::params::DiscountListParams;
//! use paywire::{ClientOptions, Params};
//!
//! let mut params = DiscountListParams::new();
//! params.set_active(Some(true));
//! params.set_page_number(None); // left off the query
//! let url = params.url(&ClientOptions::default()).unwrap();
//! assert_eq!(url.as_str(), "https://live.example.com/discounts?active=true");
//! ```

pub mod enums;
pub mod models;
pub mod params;

pub use paywire_core::{
    accessor, wire, ClientOptions, ConfigError, Environment, FieldError, Method, NullPolicy,
    OpenEnum, Params, ParamsBags, RawBacked, RawBag, RawView, RequestError, RequestParts, Slot,
    Validate, WireEnum,
};
