//! Tests for the pagination module
//!
//! All tests drive the iterators with scripted query closures; the closures
//! count fetches and capture the outgoing form of every page request so the
//! cursor/token wiring can be asserted directly.

use super::*;
use crate::error::Error;
use crate::form::FormValues;
use crate::params::{ListParams, SearchParams};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Obj {
    id: String,
}

impl Identifiable for Obj {
    fn id(&self) -> &str {
        &self.id
    }
}

fn objs(ids: &[&str]) -> Vec<Obj> {
    ids.iter().map(|id| Obj { id: (*id).to_string() }).collect()
}

fn page(has_more: bool) -> List<Obj> {
    List {
        data: Vec::new(),
        meta: ListMeta {
            has_more,
            total_count: None,
            url: "/v1/objects".to_string(),
        },
    }
}

fn search_page(has_more: bool, next_page: Option<&str>) -> SearchList<Obj> {
    SearchList {
        data: Vec::new(),
        meta: SearchMeta {
            has_more,
            next_page: next_page.map(str::to_string),
            total_count: None,
            url: "/v1/objects/search".to_string(),
        },
    }
}

// ============================================================================
// Cursor Iterator Tests
// ============================================================================

#[test]
fn test_forward_pagination_across_pages() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let forms = Arc::new(Mutex::new(Vec::new()));

    let query = {
        let fetches = Arc::clone(&fetches);
        let forms = Arc::clone(&forms);
        Box::new(move |_params: &ListParams, form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            forms.lock().unwrap().push(form.clone());
            match fetches.fetch_add(1, Ordering::SeqCst) {
                0 => Ok((objs(&["a", "b"]), page(true))),
                _ => Ok((objs(&["c"]), page(false))),
            }
        })
    };

    let params = ListParams {
        limit: Some(2),
        expand: vec!["customer".to_string()],
        ..ListParams::default()
    };
    let mut iter = ListIter::new(Some(&params), query);

    let ids: Vec<String> = iter.by_ref().map(|o| o.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(iter.err().is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 2);

    let forms = forms.lock().unwrap();
    assert_eq!(forms[0].get("limit"), Some("2"));
    assert_eq!(forms[0].get("expand[]"), Some("customer"));
    assert!(forms[0].get("starting_after").is_none());
    assert_eq!(forms[1].get("starting_after"), Some("b"));
    assert_eq!(forms[1].get("limit"), Some("2"));
}

#[test]
fn test_construction_without_params() {
    let forms = Arc::new(Mutex::new(Vec::new()));

    let query = {
        let forms = Arc::clone(&forms);
        Box::new(move |_params: &ListParams, form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            forms.lock().unwrap().push(form.clone());
            Ok((objs(&["a"]), page(false)))
        })
    };

    let ids: Vec<String> = ListIter::new(None::<&ListParams>, query).map(|o| o.id).collect();
    assert_eq!(ids, vec!["a"]);
    assert!(forms.lock().unwrap()[0].is_empty());
}

#[test]
fn test_single_page_mode_fetches_once() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &ListParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            fetches.fetch_add(1, Ordering::SeqCst);
            // has_more stays true; single mode must ignore it.
            Ok((objs(&["a", "b"]), page(true)))
        })
    };

    let params = ListParams {
        single: true,
        ..ListParams::default()
    };
    let mut iter = ListIter::new(Some(&params), query);

    let ids: Vec<String> = iter.by_ref().map(|o| o.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(iter.err().is_none());
    assert!(iter.meta().has_more);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_backward_pagination_reverses_pages() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let forms = Arc::new(Mutex::new(Vec::new()));

    // The server returns both pages in its fixed forward order.
    let query = {
        let fetches = Arc::clone(&fetches);
        let forms = Arc::clone(&forms);
        Box::new(move |_params: &ListParams, form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            forms.lock().unwrap().push(form.clone());
            match fetches.fetch_add(1, Ordering::SeqCst) {
                0 => Ok((objs(&["d", "e", "f"]), page(true))),
                _ => Ok((objs(&["a", "b", "c"]), page(false))),
            }
        })
    };

    let params = ListParams {
        ending_before: Some("g".to_string()),
        ..ListParams::default()
    };
    let mut iter = ListIter::new(Some(&params), query);

    let ids: Vec<String> = iter.by_ref().map(|o| o.id).collect();
    // Yielded newest-first; reversing recovers the forward dataset order.
    assert_eq!(ids, vec!["f", "e", "d", "c", "b", "a"]);
    let mut forward = ids.clone();
    forward.reverse();
    assert_eq!(forward, vec!["a", "b", "c", "d", "e", "f"]);

    assert!(iter.err().is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 2);

    let forms = forms.lock().unwrap();
    assert_eq!(forms[0].get("ending_before"), Some("g"));
    assert_eq!(forms[1].get("ending_before"), Some("d"));
    assert_eq!(forms[1].get_all("ending_before").len(), 1);
}

#[test]
fn test_error_is_terminal() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &ListParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            match fetches.fetch_add(1, Ordering::SeqCst) {
                0 => Ok((objs(&["a"]), page(true))),
                _ => Err(Error::other("boom")),
            }
        })
    };

    let mut iter = ListIter::new(Some(&ListParams::default()), query);

    assert_eq!(iter.next().map(|o| o.id), Some("a".to_string()));
    assert!(iter.next().is_none());
    assert_eq!(iter.err().unwrap().to_string(), "boom");

    // Further advances stay dead without refetching.
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
    assert_eq!(iter.err().unwrap().to_string(), "boom");
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_first_fetch_error_surfaces_via_err() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(
            move |_params: &ListParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
                fetches.fetch_add(1, Ordering::SeqCst);
                Err(Error::other("connection refused"))
            },
        )
    };

    let mut iter = ListIter::new(Some(&ListParams::default()), query);

    assert!(iter.next().is_none());
    assert!(iter.list().is_none());
    assert_eq!(iter.err().unwrap().to_string(), "connection refused");
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_exhaustion_is_stable() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &ListParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok((objs(&["a"]), page(false)))
        })
    };

    let mut iter = ListIter::new(Some(&ListParams::default()), query);

    assert_eq!(iter.next().map(|o| o.id), Some("a".to_string()));
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
    assert!(iter.err().is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_first_page_with_has_more_ends_iteration() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &ListParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            fetches.fetch_add(1, Ordering::SeqCst);
            // Pathological response: nothing to derive a cursor from.
            Ok((Vec::new(), page(true)))
        })
    };

    let mut iter = ListIter::new(Some(&ListParams::default()), query);

    assert!(iter.next().is_none());
    assert!(iter.err().is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_meta_tracks_latest_page() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &ListParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, List<Obj>)> {
            if fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                let mut first = page(true);
                first.meta.total_count = Some(3);
                Ok((objs(&["a"]), first))
            } else {
                let mut second = page(false);
                second.meta.total_count = Some(9);
                Ok((objs(&["b"]), second))
            }
        })
    };

    let mut iter = ListIter::new(Some(&ListParams::default()), query);
    assert_eq!(iter.meta().total_count, Some(3));
    assert!(iter.meta().has_more);
    assert_eq!(iter.list().unwrap().meta.total_count, Some(3));

    assert_eq!(iter.next().map(|o| o.id), Some("a".to_string()));
    assert_eq!(iter.next().map(|o| o.id), Some("b".to_string()));

    assert_eq!(iter.meta().total_count, Some(9));
    assert!(!iter.meta().has_more);
    assert_eq!(iter.list().unwrap().meta.total_count, Some(9));
}

// ============================================================================
// Search Iterator Tests
// ============================================================================

#[test]
fn test_search_pagination_with_token() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let forms = Arc::new(Mutex::new(Vec::new()));

    let query = {
        let fetches = Arc::clone(&fetches);
        let forms = Arc::clone(&forms);
        Box::new(move |_params: &SearchParams, form: &FormValues| -> crate::Result<(Vec<Obj>, SearchList<Obj>)> {
            forms.lock().unwrap().push(form.clone());
            match fetches.fetch_add(1, Ordering::SeqCst) {
                0 => Ok((objs(&["x"]), search_page(true, Some("tok1")))),
                _ => Ok((objs(&["y"]), search_page(false, None))),
            }
        })
    };

    let params = SearchParams::new("amount>100");
    let mut iter = SearchIter::new(Some(&params), query);

    let ids: Vec<String> = iter.by_ref().map(|o| o.id).collect();
    assert_eq!(ids, vec!["x", "y"]);
    assert!(iter.err().is_none());
    assert!(iter.meta().next_page.is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 2);

    let forms = forms.lock().unwrap();
    assert_eq!(forms[0].get("query"), Some("amount>100"));
    assert!(forms[0].get("page").is_none());
    assert_eq!(forms[1].get("page"), Some("tok1"));
    assert_eq!(forms[1].get("query"), Some("amount>100"));
}

#[test]
fn test_search_stops_without_token() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &SearchParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, SearchList<Obj>)> {
            fetches.fetch_add(1, Ordering::SeqCst);
            // has_more without a continuation token: nothing to fetch.
            Ok((objs(&["x"]), search_page(true, None)))
        })
    };

    let params = SearchParams::new("status:'open'");
    let mut iter = SearchIter::new(Some(&params), query);

    assert_eq!(iter.next().map(|o| o.id), Some("x".to_string()));
    assert!(iter.next().is_none());
    assert!(iter.err().is_none());
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_search_single_page_mode_fetches_once() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &SearchParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, SearchList<Obj>)> {
            fetches.fetch_add(1, Ordering::SeqCst);
            Ok((objs(&["x"]), search_page(true, Some("tok1"))))
        })
    };

    let params = SearchParams {
        single: true,
        ..SearchParams::new("status:'open'")
    };
    let mut iter = SearchIter::new(Some(&params), query);

    let ids: Vec<String> = iter.by_ref().map(|o| o.id).collect();
    assert_eq!(ids, vec!["x"]);
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn test_search_error_is_terminal() {
    let fetches = Arc::new(AtomicUsize::new(0));

    let query = {
        let fetches = Arc::clone(&fetches);
        Box::new(move |_params: &SearchParams, _form: &FormValues| -> crate::Result<(Vec<Obj>, SearchList<Obj>)> {
            match fetches.fetch_add(1, Ordering::SeqCst) {
                0 => Ok((objs(&["x"]), search_page(true, Some("tok1")))),
                _ => Err(Error::other("boom")),
            }
        })
    };

    let params = SearchParams::new("amount>100");
    let mut iter = SearchIter::new(Some(&params), query);

    assert_eq!(iter.next().map(|o| o.id), Some("x".to_string()));
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
    assert_eq!(iter.err().unwrap().to_string(), "boom");
    assert_eq!(fetches.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Container Decode Tests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
struct Widget {
    id: String,
    name: String,
}

#[test]
fn test_list_decodes_with_flattened_meta() {
    let body = r#"{
        "object": "list",
        "data": [{"id": "w_1", "name": "gear"}, {"id": "w_2", "name": "cog"}],
        "has_more": true,
        "total_count": 7,
        "url": "/v1/widgets"
    }"#;

    let list: List<Widget> = serde_json::from_str(body).unwrap();
    assert_eq!(list.data.len(), 2);
    assert_eq!(list.data[0].id, "w_1");
    assert!(list.meta.has_more);
    assert_eq!(list.meta.total_count, Some(7));
    assert_eq!(list.meta.url, "/v1/widgets");
    assert_eq!(list.list_meta(), &list.meta);
}

#[test]
fn test_search_list_decodes_with_flattened_meta() {
    let body = r#"{
        "object": "search_result",
        "data": [{"id": "w_3", "name": "sprocket"}],
        "has_more": true,
        "next_page": "tok_abc",
        "url": "/v1/widgets/search"
    }"#;

    let result: SearchList<Widget> = serde_json::from_str(body).unwrap();
    assert_eq!(result.data.len(), 1);
    assert_eq!(result.meta.next_page.as_deref(), Some("tok_abc"));
    assert!(result.meta.total_count.is_none());
    assert_eq!(result.search_meta(), &result.meta);
}
