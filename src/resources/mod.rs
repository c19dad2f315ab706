//! Resource bindings
//!
//! Slim models for the API resources this crate exposes, plus their
//! `list`/`search` functions. Each function wraps a cloned [`Client`] in a
//! query closure and hands it to the matching pagination iterator.
//!
//! [`Client`]: crate::http::Client

mod charge;
mod customer;
mod invoice;

pub use charge::{Charge, ChargeListParams, ChargeSearchParams};
pub use customer::{Customer, CustomerListParams};
pub use invoice::{Invoice, InvoiceListParams, InvoiceSearchParams, InvoiceStatus};
