//! Internal response model.
//!
//! # Design Decisions
//! - Constructors set `Content-Length` to match the body they are given,
//!   keeping the length invariant in one place
//! - Backend responses pass through untouched; constructors are only for
//!   responses this proxy originates itself

use crate::http::headers::Headers;

/// A response produced by a handler, before transport serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

impl ProxyResponse {
    /// A plain-text response with `Content-Length` and `Content-Type` set.
    pub fn text(status: u16, body: &str) -> Self {
        let mut headers = Headers::new();
        headers.insert("Content-Length", body.len().to_string());
        headers.insert("Content-Type", "text/plain");
        Self {
            status,
            headers,
            body: Some(body.as_bytes().to_vec()),
        }
    }

    /// A file-content response. For `HEAD` resolutions `body` is `None`
    /// while `content_length` still reports the file's size.
    pub fn file(content_type: &str, content_length: u64, body: Option<Vec<u8>>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Content-Length", content_length.to_string());
        headers.insert("Content-Type", content_type);
        Self {
            status: 200,
            headers,
            body,
        }
    }

    pub fn body_len(&self) -> usize {
        self.body.as_ref().map(Vec::len).unwrap_or(0)
    }
}
