//! Binary-vs-text content decision.
//!
//! # Responsibilities
//! - Decide whether a response body is safe to transport as text
//! - Drive the gateway adapter's base64 encoding of reply bodies
//!
//! # Design Decisions
//! - Compressed bodies are always binary regardless of Content-Type
//! - The text allowlist is deliberately small; unknown types are binary

use crate::http::headers::Headers;

/// Returns true if the response headers indicate binary content.
///
/// `Content-Type` defaults to `text/plain` when absent and
/// `Content-Encoding` to `identity`.
pub fn is_binary(headers: &Headers) -> bool {
    let content_type = headers.get("content-type").unwrap_or("text/plain");
    let content_encoding = headers.get("content-encoding").unwrap_or("identity");

    if content_encoding != "identity" {
        return true;
    }
    !is_text_content_type(content_type)
}

/// Returns true if the Content-Type value indicates text content.
fn is_text_content_type(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || content_type.starts_with("application/javascript")
        || content_type.starts_with("application/json")
        || content_type.starts_with("image/svg+xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_json_identity_is_text() {
        let h = headers(&[("Content-Type", "application/json")]);
        assert!(!is_binary(&h));
    }

    #[test]
    fn test_png_is_binary() {
        let h = headers(&[("Content-Type", "image/png")]);
        assert!(is_binary(&h));
    }

    #[test]
    fn test_missing_content_type_defaults_to_text() {
        assert!(!is_binary(&Headers::new()));
    }

    #[test]
    fn test_compressed_text_is_binary() {
        let h = headers(&[
            ("Content-Type", "text/html"),
            ("Content-Encoding", "gzip"),
        ]);
        assert!(is_binary(&h));
    }

    #[test]
    fn test_text_allowlist() {
        for ct in [
            "text/html",
            "text/css; charset=utf-8",
            "application/javascript",
            "application/json; charset=utf-8",
            "image/svg+xml",
        ] {
            let h = headers(&[("Content-Type", ct)]);
            assert!(!is_binary(&h), "{ct} should be text");
        }
        for ct in ["image/png", "application/octet-stream", "font/woff2"] {
            let h = headers(&[("Content-Type", ct)]);
            assert!(is_binary(&h), "{ct} should be binary");
        }
    }

    #[test]
    fn test_header_name_case_does_not_matter() {
        let h = headers(&[("content-TYPE", "image/png")]);
        assert!(is_binary(&h));
    }
}
