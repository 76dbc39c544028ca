//! Response models.
//!
//! Each model is a [`RawBag`](paywire_core::RawBag) with typed accessors.
//! Getters decode on every call; `validate()` checks every declared field
//! and stops at the first failure.

mod addon;
mod address;
mod customer;
mod discount;
mod dispute;
mod page;
mod payment;
mod payout;
mod refund;
mod usage_event;

pub use addon::{Addon, AddonFields};
pub use address::BillingAddress;
pub use customer::{Customer, CustomerLimitedDetails};
pub use discount::{Discount, DiscountFields};
pub use dispute::{Dispute, DisputeFields};
pub use page::PageNumberPage;
pub use payment::{Payment, PaymentFields};
pub use payout::{Payout, PayoutFields};
pub use refund::{Refund, RefundFields};
pub use usage_event::UsageEvent;
