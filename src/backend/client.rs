//! Upstream HTTP client for the API server.
//!
//! # Responsibilities
//! - Rebuild the outbound URL (path + re-encoded query string)
//! - Forward all headers, repeated names as repeated header lines
//! - Enforce the per-request time budget
//! - Buffer the full response
//!
//! # Design Decisions
//! - A fresh outbound connection per forwarded request; the connector
//!   does the dialing, no pooling guarantees are relied on
//! - Failures surface as typed errors; the transport adapter maps them
//!   to 502/504 for the original caller

use axum::body::Body;
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::{self, Request};
use http_body_util::BodyExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use url::form_urlencoded;

use crate::error::ProxyError;
use crate::http::{Headers, ProxyRequest, ProxyResponse};

/// Forwards requests to the API server at a fixed host:port.
#[derive(Clone)]
pub struct ApiClient {
    client: Client<HttpConnector, Body>,
    authority: String,
}

impl ApiClient {
    pub fn new(host: &str, port: u16) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            authority: format!("{host}:{port}"),
        }
    }

    /// Forward `request` to the API server and buffer its response.
    ///
    /// Exceeding `request.timeout` aborts the call with
    /// [`ProxyError::UpstreamTimeout`]; connection failures surface as
    /// [`ProxyError::Upstream`].
    pub async fn forward(&self, request: &ProxyRequest) -> Result<ProxyResponse, ProxyError> {
        let uri = format!("http://{}{}", self.authority, encode_url(request));

        let mut builder = Request::builder().method(request.method.as_str()).uri(&uri);
        if let Some(outbound_headers) = builder.headers_mut() {
            for (name, values) in request.headers.iter() {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(http::Error::from)?;
                for value in values {
                    let value = HeaderValue::from_str(value).map_err(http::Error::from)?;
                    outbound_headers.append(name.clone(), value);
                }
            }
        }
        let body = match &request.body {
            Some(bytes) => Body::from(bytes.clone()),
            None => Body::empty(),
        };
        let outbound = builder.body(body)?;

        tracing::debug!(uri = %uri, timeout = ?request.timeout, "Forwarding to API server");

        let call = async {
            let response = self.client.request(outbound).await?;

            let status = response.status().as_u16();
            let mut headers = Headers::new();
            for (name, value) in response.headers() {
                match value.to_str() {
                    Ok(value) => headers.append(name.as_str(), value),
                    Err(_) => tracing::warn!(
                        header = %name,
                        "Dropping non-UTF-8 header value from API server response"
                    ),
                }
            }

            let body = response.into_body().collect().await?.to_bytes();
            Ok::<_, ProxyError>(ProxyResponse {
                status,
                headers,
                body: Some(body.to_vec()),
            })
        };

        match tokio::time::timeout(request.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::UpstreamTimeout),
        }
    }
}

/// Path plus, when query parameters exist, a `?`-prefixed re-encoded
/// query string with repeated keys emitted as repeated pairs.
fn encode_url(request: &ProxyRequest) -> String {
    let mut url = request.path.clone();
    if !request.query.is_empty() {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        url.push('?');
        url.push_str(&encoded);
    }
    url
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::http::Method;

    fn request(path: &str, query: Vec<(String, String)>) -> ProxyRequest {
        ProxyRequest {
            method: Method::Get,
            path: path.to_string(),
            query,
            headers: Headers::new(),
            body: None,
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn test_encode_url_without_query() {
        assert_eq!(encode_url(&request("/api/items", vec![])), "/api/items");
    }

    #[test]
    fn test_encode_url_repeated_keys() {
        let url = encode_url(&request(
            "/api/items",
            vec![
                ("tag".into(), "a".into()),
                ("tag".into(), "b".into()),
                ("q".into(), "x y".into()),
            ],
        ));
        assert_eq!(url, "/api/items?tag=a&tag=b&q=x+y");
    }
}
