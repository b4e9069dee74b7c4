/// Ordered key/value pairs for the search endpoint.
///
/// Values are joined verbatim: no percent-encoding is applied, so a value
/// containing `&` or `=` changes the meaning of the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pairs: Vec<(&'static str, String)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Adds `key=value` only when `value` is non-empty.
    pub fn push_non_empty(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.push(key, value)
    }

    /// Adds `key=true` only when `flag` is set.
    pub fn push_flag(self, key: &'static str, flag: bool) -> Self {
        if !flag {
            return self;
        }
        self.push(key, "true")
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
