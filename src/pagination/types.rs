//! Pagination types and traits
//!
//! Defines the page metadata containers and the capability traits the
//! iterators are generic over.

use serde::Deserialize;

/// Metadata attached to every list-endpoint page
///
/// Produced fresh by each page fetch; the iterator owns the most recent one
/// and replaces it wholesale per fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListMeta {
    /// Whether more items exist beyond this page
    #[serde(default)]
    pub has_more: bool,
    /// Total number of matching items, when the server reports it
    #[serde(default)]
    pub total_count: Option<u32>,
    /// URL of the endpoint this page came from
    #[serde(default)]
    pub url: String,
}

/// Metadata attached to every search-endpoint page
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchMeta {
    /// Whether more results exist beyond this page
    #[serde(default)]
    pub has_more: bool,
    /// Opaque continuation token for the next page, when one exists
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total number of matching results, when the server reports it
    #[serde(default)]
    pub total_count: Option<u32>,
    /// URL of the endpoint this page came from
    #[serde(default)]
    pub url: String,
}

/// A decoded page from a list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct List<T> {
    /// The items on this page, in the server's fixed forward order
    pub data: Vec<T>,
    /// Pagination metadata for this page
    #[serde(flatten)]
    pub meta: ListMeta,
}

/// A decoded page from a search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchList<T> {
    /// The results on this page
    pub data: Vec<T>,
    /// Pagination metadata for this page
    #[serde(flatten)]
    pub meta: SearchMeta,
}

/// A page type that carries list-pagination metadata
///
/// Any list-endpoint response type implements this by delegating to an
/// embedded [`ListMeta`]; the cursor iterator only ever reads the metadata.
pub trait ListContainer {
    /// The page's pagination metadata
    fn list_meta(&self) -> &ListMeta;
}

impl<T> ListContainer for List<T> {
    fn list_meta(&self) -> &ListMeta {
        &self.meta
    }
}

impl ListContainer for ListMeta {
    fn list_meta(&self) -> &ListMeta {
        self
    }
}

/// A page type that carries search-pagination metadata
pub trait SearchContainer {
    /// The page's pagination metadata
    fn search_meta(&self) -> &SearchMeta;
}

impl<T> SearchContainer for SearchList<T> {
    fn search_meta(&self) -> &SearchMeta {
        &self.meta
    }
}

impl SearchContainer for SearchMeta {
    fn search_meta(&self) -> &SearchMeta {
        self
    }
}

/// An item that exposes its object ID for cursor construction
///
/// The cursor iterator derives `starting_after`/`ending_before` values from
/// the most recently yielded item's ID; every paginable resource model
/// implements this.
pub trait Identifiable {
    /// The item's object ID
    fn id(&self) -> &str;
}
