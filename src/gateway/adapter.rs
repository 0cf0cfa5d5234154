//! Gateway event translation.
//!
//! # Responsibilities
//! - Normalize a gateway event into the internal request model
//! - Derive the per-request timeout from the host's remaining budget
//! - Serialize the response into the gateway reply envelope
//!
//! # Design Decisions
//! - The timeout keeps a fixed safety buffer so the backend call always
//!   resolves before the host's own deadline
//! - Comma-joined header values are split back into sequences; cookies
//!   are appended to the multi-valued Cookie header

use std::collections::BTreeMap;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use url::form_urlencoded;

use crate::error::ProxyError;
use crate::gateway::event::{GatewayEvent, GatewayReply};
use crate::http::{content, Headers, Method, ProxyRequest, ProxyResponse};
use crate::routing::ProxyRouter;

/// Subtracted from the host's remaining execution budget when deriving
/// the backend call timeout.
pub const TIMEOUT_BUFFER: Duration = Duration::from_secs(1);

/// Handle one gateway invocation end to end.
///
/// `remaining_time` is the host's reported remaining execution budget.
/// Upstream failures are mapped to 5xx replies here; only a malformed
/// event (or an internal fault) propagates as an error, and that error
/// is fatal to this invocation only.
pub async fn handle_event(
    event: GatewayEvent,
    remaining_time: Duration,
    router: &ProxyRouter,
) -> Result<GatewayReply, ProxyError> {
    let request = parse_event(event, remaining_time)?;

    let response = match router.route(request).await {
        Ok(response) => response,
        Err(
            err @ (ProxyError::Upstream(_)
            | ProxyError::UpstreamTimeout
            | ProxyError::UpstreamBody(_)
            | ProxyError::Http(_)),
        ) => {
            tracing::error!(error = %err, "Upstream failure during gateway invocation");
            let status = err.status_code();
            let reason = if status == 504 { "Gateway Timeout" } else { "Bad Gateway" };
            ProxyResponse::text(status, reason)
        }
        Err(err) => return Err(err),
    };

    Ok(encode_reply(response))
}

/// Normalize a gateway event into a [`ProxyRequest`].
pub fn parse_event(event: GatewayEvent, remaining_time: Duration) -> Result<ProxyRequest, ProxyError> {
    if event.version != "2.0" {
        return Err(ProxyError::BadEvent(format!(
            "unsupported payload version {:?}",
            event.version
        )));
    }

    let method = Method::parse(&event.request_context.http.method).ok_or_else(|| {
        ProxyError::BadEvent(format!(
            "unsupported method {:?}",
            event.request_context.http.method
        ))
    })?;

    let query: Vec<(String, String)> = form_urlencoded::parse(event.raw_query_string.as_bytes())
        .into_owned()
        .collect();

    let mut headers = Headers::new();
    for (name, joined) in &event.headers {
        for value in joined.split(',') {
            headers.append(name, value);
        }
    }
    for cookie in &event.cookies {
        headers.append("Cookie", cookie.clone());
    }

    let body = match event.body {
        Some(body) if event.is_base64_encoded => Some(
            BASE64
                .decode(body.as_bytes())
                .map_err(|e| ProxyError::BadEvent(format!("invalid base64 body: {e}")))?,
        ),
        Some(body) => Some(body.into_bytes()),
        None => None,
    };

    Ok(ProxyRequest {
        method,
        path: event.request_context.http.path,
        query,
        headers,
        body,
        timeout: remaining_time.saturating_sub(TIMEOUT_BUFFER),
    })
}

/// Serialize a response into the gateway reply envelope.
pub fn encode_reply(response: ProxyResponse) -> GatewayReply {
    let mut headers = BTreeMap::new();
    let mut cookies = Vec::new();
    for (name, values) in response.headers.iter() {
        if name.eq_ignore_ascii_case("set-cookie") {
            cookies.extend(values.iter().cloned());
        } else {
            headers.insert(name.to_string(), values.join(","));
        }
    }

    let bytes = response.body.unwrap_or_default();
    let (body, is_base64_encoded) = if content::is_binary(&response.headers) {
        (BASE64.encode(&bytes), true)
    } else {
        match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            // A text-classified body that is not valid UTF-8 still has
            // to cross the wire byte for byte.
            Err(raw) => (BASE64.encode(raw.as_bytes()), true),
        }
    };

    GatewayReply {
        status_code: response.status,
        headers,
        cookies,
        is_base64_encoded,
        body,
    }
}
