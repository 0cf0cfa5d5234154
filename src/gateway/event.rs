//! API Gateway v2 (HTTP API) event and reply envelopes.
//!
//! The wire format is treated as a given; field names follow the
//! platform's camelCase JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ProxyError;

/// Inbound gateway event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    /// Payload format version; only "2.0" is supported.
    pub version: String,

    pub request_context: RequestContext,

    #[serde(default)]
    pub raw_query_string: String,

    /// Header values; the gateway comma-joins repeated headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Cookie strings, delivered separately from the headers map.
    #[serde(default)]
    pub cookies: Vec<String>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    /// Deserialize an event from its JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, ProxyError> {
        serde_json::from_str(payload).map_err(|e| ProxyError::BadEvent(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub http: HttpContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpContext {
    pub method: String,
    pub path: String,
}

/// Outbound gateway reply.
///
/// The gateway forbids repeated header names but allows multiple
/// cookies, so `Set-Cookie` values live in `cookies` and every other
/// repeated header is comma-joined.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayReply {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub cookies: Vec<String>,
    pub is_base64_encoded: bool,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let event = GatewayEvent::from_json(
            r#"{
                "version": "2.0",
                "requestContext": {"http": {"method": "GET", "path": "/api/items"}},
                "rawQueryString": "tag=a&tag=b",
                "headers": {"accept": "application/json,text/html"},
                "cookies": ["session=abc"],
                "isBase64Encoded": false
            }"#,
        )
        .unwrap();

        assert_eq!(event.version, "2.0");
        assert_eq!(event.request_context.http.method, "GET");
        assert_eq!(event.request_context.http.path, "/api/items");
        assert_eq!(event.raw_query_string, "tag=a&tag=b");
        assert_eq!(event.cookies, vec!["session=abc"]);
        assert_eq!(event.body, None);
        assert!(!event.is_base64_encoded);
    }

    #[test]
    fn test_missing_required_fields_is_bad_event() {
        let err = GatewayEvent::from_json(r#"{"version": "2.0"}"#).unwrap_err();
        assert!(matches!(err, ProxyError::BadEvent(_)));
    }

    #[test]
    fn test_reply_serialization_shape() {
        let reply = GatewayReply {
            status_code: 200,
            headers: [("Content-Type".to_string(), "text/html".to_string())].into(),
            cookies: vec!["a=1".into()],
            is_base64_encoded: false,
            body: "ok".into(),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["headers"]["Content-Type"], "text/html");
        assert_eq!(json["cookies"][0], "a=1");
        assert_eq!(json["isBase64Encoded"], false);
        assert_eq!(json["body"], "ok");
    }
}
