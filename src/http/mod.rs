//! HTTP transport module
//!
//! Provides the blocking API client used by every resource binding.
//!
//! Cancellation and timeouts live here (the configured request timeout);
//! the pagination iterators have none of their own.

mod client;

pub use client::Client;
