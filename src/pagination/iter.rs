//! Lazy page iterators
//!
//! Both iterators present a pull-based sequence over a paginated endpoint:
//! construction fetches the first page synchronously, and each `next()` call
//! pops the buffered page head, fetching the following page inline exactly
//! when the buffer runs dry. At most one page is ever buffered and no fetch
//! happens ahead of demand, so a caller that stops consuming stops all
//! network traffic.
//!
//! A fetch failure is terminal: the error is kept, `next()` returns `None`
//! from then on, and the caller distinguishes "exhausted" from "failed" by
//! checking [`ListIter::err`] / [`SearchIter::err`] after the loop.
//!
//! Iterators are stateful and not safe for concurrent use; drive each
//! instance from a single thread.

use std::collections::VecDeque;

use tracing::debug;

use super::types::{Identifiable, List, ListContainer, ListMeta, SearchContainer, SearchList, SearchMeta};
use crate::error::{Error, Result};
use crate::form::{FormValues, ToFormValues};
use crate::params::{keys, ListParams, ListParamsContainer, SearchParams, SearchParamsContainer};

/// Query callback for list endpoints
///
/// Performs the network call for one page and returns the decoded items
/// together with the page container. Supplied by each resource's `list`
/// function; the iterator invokes it once per page boundary.
pub type ListQuery<T, C> = Box<dyn FnMut(&ListParams, &FormValues) -> Result<(Vec<T>, C)> + Send>;

/// Query callback for search endpoints
pub type SearchQuery<T, C> =
    Box<dyn FnMut(&SearchParams, &FormValues) -> Result<(Vec<T>, C)> + Send>;

// ============================================================================
// Cursor Iterator (list pagination)
// ============================================================================

/// Iterator over a list endpoint paginated by ID cursors
///
/// Pages forward via `starting_after` by default, or backward via
/// `ending_before` when the caller set that cursor. Backward pages arrive
/// from the server in its fixed forward order and are reversed before
/// buffering, so items are always yielded in the caller's traversal order.
pub struct ListIter<T, C = List<T>> {
    query: ListQuery<T, C>,
    params: ListParams,
    form: FormValues,
    buffer: VecDeque<T>,
    list: Option<C>,
    meta: ListMeta,
    last_id: Option<String>,
    err: Option<Error>,
}

impl<T: Identifiable, C: ListContainer> ListIter<T, C> {
    /// Create an iterator and synchronously fetch the first page
    ///
    /// The paging controls are snapshotted from `params`; mutating the
    /// caller's struct afterwards has no effect on this iterator.
    /// Construction itself never fails — a first-fetch error is stored and
    /// surfaced through [`err`](Self::err) and the first `next()` call.
    pub fn new<P>(params: Option<&P>, query: ListQuery<T, C>) -> Self
    where
        P: ListParamsContainer + ToFormValues,
    {
        let mut form = FormValues::new();
        if let Some(p) = params {
            p.encode_form(&mut form);
        }
        let snapshot = params.map(|p| p.list_params().clone()).unwrap_or_default();

        let mut iter = Self {
            query,
            params: snapshot,
            form,
            buffer: VecDeque::new(),
            list: None,
            meta: ListMeta::default(),
            last_id: None,
            err: None,
        };
        iter.fetch_page();
        iter
    }

    /// The error that ended iteration, if any
    ///
    /// `None` after normal exhaustion. Once set it never changes.
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Metadata of the most recently fetched page
    pub fn meta(&self) -> &ListMeta {
        &self.meta
    }

    /// The most recently fetched page container
    ///
    /// Changes identity on every page fetch; `None` only if the very first
    /// fetch failed.
    pub fn list(&self) -> Option<&C> {
        self.list.as_ref()
    }

    fn fetch_page(&mut self) {
        match (self.query)(&self.params, &self.form) {
            Ok((mut items, container)) => {
                // The server returns every page in fixed forward order;
                // when walking backward the page must be flipped so items
                // come out in the caller's traversal order.
                if self.params.ending_before.is_some() {
                    items.reverse();
                }
                debug!(
                    "Fetched list page: {} items, has_more={}",
                    items.len(),
                    container.list_meta().has_more
                );
                self.meta = container.list_meta().clone();
                self.buffer = items.into();
                self.list = Some(container);
            }
            Err(err) => {
                // Terminal: first error wins and stops all further fetches.
                if self.err.is_none() {
                    self.err = Some(err);
                }
            }
        }
    }
}

impl<T: Identifiable, C: ListContainer> Iterator for ListIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            if self.err.is_some() || self.params.single || !self.meta.has_more {
                return None;
            }
            // An empty page with has_more set leaves nothing to cursor
            // from; iteration ends cleanly.
            let cursor = self.last_id.clone()?;
            if self.params.ending_before.is_some() {
                self.params.ending_before = Some(cursor.clone());
                self.form.set(keys::ENDING_BEFORE, cursor);
            } else {
                self.params.starting_after = Some(cursor.clone());
                self.form.set(keys::STARTING_AFTER, cursor);
            }
            self.fetch_page();
        }

        let item = self.buffer.pop_front()?;
        self.last_id = Some(item.id().to_string());
        Some(item)
    }
}

impl<T, C> std::fmt::Debug for ListIter<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListIter")
            .field("params", &self.params)
            .field("buffered", &self.buffer.len())
            .field("meta", &self.meta)
            .field("has_err", &self.err.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Search Iterator (token pagination)
// ============================================================================

/// Iterator over a search endpoint paginated by continuation tokens
///
/// Search results are forward-only: each page's metadata carries an opaque
/// `next_page` token which becomes the `page` parameter of the following
/// fetch. No cursor derivation and no reversal happen here.
pub struct SearchIter<T, C = SearchList<T>> {
    query: SearchQuery<T, C>,
    params: SearchParams,
    form: FormValues,
    buffer: VecDeque<T>,
    result: Option<C>,
    meta: SearchMeta,
    err: Option<Error>,
}

impl<T, C: SearchContainer> SearchIter<T, C> {
    /// Create an iterator and synchronously fetch the first page
    ///
    /// Same contract as [`ListIter::new`]: parameters are snapshotted and a
    /// first-fetch error is stored rather than returned.
    pub fn new<P>(params: Option<&P>, query: SearchQuery<T, C>) -> Self
    where
        P: SearchParamsContainer + ToFormValues,
    {
        let mut form = FormValues::new();
        if let Some(p) = params {
            p.encode_form(&mut form);
        }
        let snapshot = params
            .map(|p| p.search_params().clone())
            .unwrap_or_default();

        let mut iter = Self {
            query,
            params: snapshot,
            form,
            buffer: VecDeque::new(),
            result: None,
            meta: SearchMeta::default(),
            err: None,
        };
        iter.fetch_page();
        iter
    }

    /// The error that ended iteration, if any
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Metadata of the most recently fetched page
    pub fn meta(&self) -> &SearchMeta {
        &self.meta
    }

    /// The most recently fetched page container
    pub fn search_result(&self) -> Option<&C> {
        self.result.as_ref()
    }

    fn fetch_page(&mut self) {
        match (self.query)(&self.params, &self.form) {
            Ok((items, container)) => {
                debug!(
                    "Fetched search page: {} items, has_more={}",
                    items.len(),
                    container.search_meta().has_more
                );
                self.meta = container.search_meta().clone();
                self.buffer = items.into();
                self.result = Some(container);
            }
            Err(err) => {
                if self.err.is_none() {
                    self.err = Some(err);
                }
            }
        }
    }
}

impl<T, C: SearchContainer> Iterator for SearchIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            if self.err.is_some() || self.params.single || !self.meta.has_more {
                return None;
            }
            // has_more without a token means the server has nothing more
            // to hand out; stop rather than refetch the same page.
            let token = self.meta.next_page.clone()?;
            self.params.page = Some(token.clone());
            self.form.set(keys::PAGE, token);
            self.fetch_page();
        }

        self.buffer.pop_front()
    }
}

impl<T, C> std::fmt::Debug for SearchIter<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIter")
            .field("params", &self.params)
            .field("buffered", &self.buffer.len())
            .field("meta", &self.meta)
            .field("has_err", &self.err.is_some())
            .finish_non_exhaustive()
    }
}
