//! Request form values
//!
//! The API accepts its request parameters as `application/x-www-form-urlencoded`
//! key/value pairs, with repeated bracket keys (`expand[]=...`) for arrays.
//! [`FormValues`] is the ordered multi-map those pairs live in; every parameter
//! struct encodes itself into one via [`ToFormValues`], and the pagination
//! iterators overwrite cursor keys in place between page fetches.

use url::form_urlencoded;

/// An ordered key→value multi-map of outgoing request parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair, keeping any existing pairs under the same key
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace every pair under `key` with a single new value
    ///
    /// Cursor and token updates go through here so that repeated page fetches
    /// never accumulate stale `starting_after`/`ending_before`/`page` pairs.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Get the first value under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get every value under `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Number of key/value pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check whether the form holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over all pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode the form as an `application/x-www-form-urlencoded` string
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Types that can encode themselves into request form values
///
/// Every request-parameter struct implements this; array fields use the
/// bracket convention (`expand[]=charges.data`), nested structs delegate to
/// their embedded parameter values.
pub trait ToFormValues {
    /// Append this value's fields to `form`
    fn encode_form(&self, form: &mut FormValues);

    /// Encode into a fresh form
    fn to_form_values(&self) -> FormValues {
        let mut form = FormValues::new();
        self.encode_form(&mut form);
        form
    }
}
