use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// `"Name: value"` lines sent after the default headers.
    pub headers: Option<Vec<String>>,
    pub query: Option<Vec<(String, String)>>,
    /// Turns the request into a POST when present.
    pub body: Option<String>,
    /// Overrides the transport's timeout for this request only.
    pub timeout_ms: Option<u64>,
}

impl FetchRequest {
    pub fn get<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn method(&self) -> &'static str {
        if self.body.is_some() {
            "POST"
        } else {
            "GET"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Lower-cased header names; the last value wins on duplicates.
    pub headers: HashMap<String, String>,
    /// The status line followed by every received header line.
    pub raw_header_lines: Vec<String>,
    pub body: String,
    /// Set when no HTTP response could be obtained at all.
    pub error: Option<String>,
}

impl Response {
    pub fn from_error<S: Into<String>>(error: S) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    pub fn status_line(&self) -> Option<&str> {
        self.raw_header_lines.first().map(String::as_str)
    }
}
