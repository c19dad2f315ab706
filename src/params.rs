//! Generic request parameters
//!
//! Every list endpoint shares the same paging controls (`limit`, the
//! `starting_after`/`ending_before` ID cursors, `expand[]`), and every search
//! endpoint shares `query`/`page`. Resource-specific parameter structs embed
//! [`ListParams`] or [`SearchParams`] and surface them through the container
//! traits so the pagination iterators can snapshot them without knowing the
//! concrete struct.

use crate::form::{FormValues, ToFormValues};

/// Wire keys for the shared paging parameters
pub mod keys {
    /// Maximum number of items per page
    pub const LIMIT: &str = "limit";
    /// Forward ID cursor: return items after this object
    pub const STARTING_AFTER: &str = "starting_after";
    /// Backward ID cursor: return items before this object
    pub const ENDING_BEFORE: &str = "ending_before";
    /// Fields to expand inline, bracket-array encoded
    pub const EXPAND: &str = "expand[]";
    /// Free-text search query
    pub const QUERY: &str = "query";
    /// Opaque continuation token for search pagination
    pub const PAGE: &str = "page";
}

/// Paging controls shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Maximum number of items per page (1-100, server default 10)
    pub limit: Option<u64>,
    /// Return items after this object ID (forward paging)
    pub starting_after: Option<String>,
    /// Return items before this object ID (backward paging)
    pub ending_before: Option<String>,
    /// Response fields to expand inline
    pub expand: Vec<String>,
    /// Fetch at most one page, never auto-paginate. Client-side only,
    /// never serialized.
    pub single: bool,
}

impl ToFormValues for ListParams {
    fn encode_form(&self, form: &mut FormValues) {
        if let Some(limit) = self.limit {
            form.add(keys::LIMIT, limit.to_string());
        }
        if let Some(cursor) = &self.starting_after {
            form.add(keys::STARTING_AFTER, cursor);
        }
        if let Some(cursor) = &self.ending_before {
            form.add(keys::ENDING_BEFORE, cursor);
        }
        for field in &self.expand {
            form.add(keys::EXPAND, field);
        }
    }
}

/// Paging controls shared by every search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text search query (required by the server)
    pub query: String,
    /// Maximum number of items per page (1-100, server default 10)
    pub limit: Option<u64>,
    /// Continuation token from a previous page's `next_page`
    pub page: Option<String>,
    /// Response fields to expand inline
    pub expand: Vec<String>,
    /// Fetch at most one page, never auto-paginate. Client-side only,
    /// never serialized.
    pub single: bool,
}

impl SearchParams {
    /// Create search params for a query string
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

impl ToFormValues for SearchParams {
    fn encode_form(&self, form: &mut FormValues) {
        form.add(keys::QUERY, &self.query);
        if let Some(limit) = self.limit {
            form.add(keys::LIMIT, limit.to_string());
        }
        if let Some(token) = &self.page {
            form.add(keys::PAGE, token);
        }
        for field in &self.expand {
            form.add(keys::EXPAND, field);
        }
    }
}

/// Access to the embedded generic list params
///
/// Implemented by every list-endpoint parameter struct; the cursor iterator
/// uses it to snapshot the paging controls at construction.
pub trait ListParamsContainer {
    /// The embedded generic list params
    fn list_params(&self) -> &ListParams;
}

impl ListParamsContainer for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }
}

/// Access to the embedded generic search params
pub trait SearchParamsContainer {
    /// The embedded generic search params
    fn search_params(&self) -> &SearchParams;
}

impl SearchParamsContainer for SearchParams {
    fn search_params(&self) -> &SearchParams {
        self
    }
}
