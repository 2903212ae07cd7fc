//! Ordered query parameters
//!
//! BitAsset verifies signatures over the exact query string the client
//! produced, so parameter order and escaping must be reproducible. The
//! encoders here follow the exchange's reference client: `urlencode` with
//! `quote_plus` escaping.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

/// Characters left unescaped in the signing payload
const SIGNING_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

/// URL query set: additionally keeps `/` and bracketed array keys literal
const URL_SET: &AsciiSet = &SIGNING_SET.remove(b'/').remove(b'[').remove(b']');

/// Insertion-ordered string parameters
///
/// Inserting a key that already exists replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();

        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert every pair of `other`, overriding on collision
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Encode as the payload that gets signed
    pub fn to_signing_payload(&self) -> String {
        self.encode(SIGNING_SET)
    }

    /// Encode for the request URL
    ///
    /// Same as the signing payload except `/`, `[` and `]` stay literal.
    pub fn to_url_query(&self) -> String {
        self.encode(URL_SET)
    }

    fn encode(&self, set: &'static AsciiSet) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", quote_plus(k, set), quote_plus(v, set)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn quote_plus(input: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, set).to_string().replace(' ', "+")
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let params = QueryParams::new()
            .with("b", 2)
            .with("a", 1)
            .with("c", 3);

        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_overrides_in_place() {
        let mut params = QueryParams::new().with("apiAccessKey", "x").with("apiTimeStamp", "1");
        params.insert("apiAccessKey", "y");

        assert_eq!(params.len(), 2);
        assert_eq!(params.to_signing_payload(), "apiAccessKey=y&apiTimeStamp=1");
    }

    #[test]
    fn test_signing_payload_escaping() {
        let params = QueryParams::new()
            .with("note", "a b/c")
            .with("ids[]", "1,2")
            .with("safe", "A-z_0.9~");

        assert_eq!(
            params.to_signing_payload(),
            "note=a+b%2Fc&ids%5B%5D=1%2C2&safe=A-z_0.9~"
        );
    }

    #[test]
    fn test_url_query_keeps_brackets_and_slash() {
        let params = QueryParams::new()
            .with("note", "a b/c")
            .with("ids[]", "1,2");

        assert_eq!(params.to_url_query(), "note=a+b/c&ids[]=1%2C2");
    }

    #[test]
    fn test_non_ascii_is_utf8_escaped() {
        let params = QueryParams::new().with("q", "é");
        assert_eq!(params.to_signing_payload(), "q=%C3%A9");
    }

    #[test]
    fn test_empty_encodes_to_empty_string() {
        assert_eq!(QueryParams::new().to_url_query(), "");
    }
}
