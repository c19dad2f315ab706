//! Pagination module
//!
//! The API paginates list endpoints with ID cursors (`starting_after` /
//! `ending_before` plus `has_more`) and search endpoints with opaque
//! `next_page` tokens. [`ListIter`] and [`SearchIter`] hide both protocols
//! behind plain Rust iterators that fetch pages lazily.
//!
//! # Overview
//!
//! A resource's `list`/`search` function builds an iterator from the
//! caller's parameters and a query closure that performs one page fetch.
//! The iterator owns a private parameter snapshot and form buffer, keeps at
//! most one page in memory, and pulls the next page inline only when the
//! buffer empties.

mod iter;
mod types;

pub use iter::{ListIter, ListQuery, SearchIter, SearchQuery};
pub use types::{
    Identifiable, List, ListContainer, ListMeta, SearchContainer, SearchList, SearchMeta,
};

#[cfg(test)]
mod tests;
