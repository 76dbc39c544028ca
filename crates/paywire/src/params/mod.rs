//! Request parameter objects, one per endpoint.
//!
//! Nullable body fields write an explicit null when set to `None` (the API
//! reads that as "clear"). Filters, paging and other non-nullable optional
//! fields treat `None` as "leave it off the request".

mod customers;
mod discounts;
mod refunds;
mod usage_events;

pub use customers::{
    CustomerCreateParams, CustomerListParams, CustomerRetrieveParams, CustomerUpdateParams,
};
pub use discounts::{
    DiscountCreateParams, DiscountDeleteParams, DiscountListParams, DiscountRetrieveParams,
    DiscountUpdateParams,
};
pub use refunds::{RefundCreateParams, RefundItem, RefundListParams, RefundRetrieveParams};
pub use usage_events::{
    EventInput, UsageEventIngestParams, UsageEventListParams, UsageEventRetrieveParams,
};
