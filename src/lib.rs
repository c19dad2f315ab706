//! # LedgerPay Rust Client
//!
//! A client library for the LedgerPay payments API with lazy, pull-based
//! pagination over its list and search endpoints.
//!
//! ## Features
//!
//! - **Cursor Pagination**: list endpoints page via `starting_after` /
//!   `ending_before` ID cursors, forward or backward
//! - **Token Pagination**: search endpoints page via opaque `next_page`
//!   continuation tokens
//! - **Lazy Fetching**: iterators buffer one page and fetch the next inline
//!   only when the buffer runs dry
//! - **Form Encoding**: request parameters encode to
//!   `application/x-www-form-urlencoded` pairs with bracket arrays
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ledgerpay::{Charge, ChargeListParams, Client, ListParams};
//!
//! fn main() -> ledgerpay::Result<()> {
//!     let client = Client::new("sk_test_...");
//!
//!     let params = ChargeListParams {
//!         params: ListParams {
//!             limit: Some(100),
//!             ..ListParams::default()
//!         },
//!         ..ChargeListParams::default()
//!     };
//!
//!     // Pages are fetched transparently as the iterator advances.
//!     let mut charges = Charge::list(&client, &params);
//!     for charge in charges.by_ref() {
//!         println!("{} {} {}", charge.id, charge.amount, charge.currency);
//!     }
//!
//!     // Distinguish exhaustion from a failed page fetch.
//!     if let Some(err) = charges.err() {
//!         return Err(ledgerpay::Error::other(err.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Client configuration
pub mod config;

/// Request form values and encoding
pub mod form;

/// Generic list/search request parameters
pub mod params;

/// Blocking HTTP transport
pub mod http;

/// Lazy page iterators and pagination metadata
pub mod pagination;

/// Resource models and their list/search bindings
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use form::{FormValues, ToFormValues};
pub use http::Client;
pub use pagination::{
    Identifiable, List, ListContainer, ListIter, ListMeta, SearchContainer, SearchIter,
    SearchList, SearchMeta,
};
pub use params::{ListParams, SearchParams};
pub use resources::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
