use std::fmt;

/// One outbound GET: URL, query parameters and static headers.
///
/// Immutable once built; the fetcher reuses it unchanged for every attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    url: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("RequestDescriptor")
            .field("url", &self.url)
            .field("query", &self.query)
            .field("headers", &header_names)
            .finish()
    }
}

impl RequestDescriptor {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Appends a static header, e.g. an API key.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
