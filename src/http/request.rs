//! Internal request model.
//!
//! # Responsibilities
//! - Represent a request independently of the transport it arrived on
//! - Carry the remaining time budget for any backend call
//!
//! # Design Decisions
//! - A closed verb set: the proxy serves a fixed surface, anything else
//!   is rejected at the transport boundary
//! - Query parameters keep repeated keys and their order

use std::fmt;
use std::time::Duration;

use crate::http::headers::Headers;

/// HTTP methods accepted by the proxy surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
}

impl Method {
    /// Parse a method name, case-insensitively. Returns `None` for verbs
    /// outside the supported set.
    pub fn parse(s: &str) -> Option<Method> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "HEAD" => Some(Method::Head),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "OPTIONS" => Some(Method::Options),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request normalized from either transport.
///
/// Created per request, fully consumed within that request's handling,
/// and discarded; no state crosses requests.
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub method: Method,
    /// Always starts with `/`.
    pub path: String,
    /// Ordered query pairs; repeated keys preserved.
    pub query: Vec<(String, String)>,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
    /// Remaining time budget for any backend call.
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("get"), Some(Method::Get));
        assert_eq!(Method::parse("Options"), Some(Method::Options));
        assert_eq!(Method::parse("PATCH"), None);
        assert_eq!(Method::parse("TRACE"), None);
        assert_eq!(Method::parse(""), None);
    }

    #[test]
    fn test_method_round_trip() {
        for method in [
            Method::Get,
            Method::Head,
            Method::Post,
            Method::Put,
            Method::Delete,
            Method::Options,
        ] {
            assert_eq!(Method::parse(method.as_str()), Some(method));
        }
    }
}
