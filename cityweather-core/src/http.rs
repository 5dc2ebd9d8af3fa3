//! Minimal HTTP boundary used by the geocoder and forecast clients.
//!
//! The clients only ever need `GET url -> (status, body)`, so that is all the
//! trait exposes. Tests substitute an in-memory implementation.

use std::{fmt::Debug, time::Duration};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

const USER_AGENT: &str = concat!("cityweather/", env!("CARGO_PKG_VERSION"));

/// Status and raw body of a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    /// Issue a single GET. Errors only when no response could be obtained.
    async fn get(&self, url: &Url) -> anyhow::Result<HttpResponse>;
}

/// `HttpClient` backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { http })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url) -> anyhow::Result<HttpResponse> {
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| {
                format!("Failed to send request to {}", url.host_str().unwrap_or("?"))
            })?;

        let status = res.status().as_u16();
        let body = res.text().await.context("Failed to read response body")?;

        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    reason: Option<String>,
}

/// Human-readable reason for a failed response.
///
/// Uses the JSON `reason` field when present and non-empty, else `HTTP <status>`.
pub fn error_reason(res: &HttpResponse) -> String {
    serde_json::from_str::<ErrorBody>(&res.body)
        .ok()
        .and_then(|b| b.reason)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", res.status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_from_json_body() {
        let res = HttpResponse::new(429, r#"{"error":true,"reason":"rate limited"}"#);
        assert_eq!(error_reason(&res), "rate limited");
    }

    #[test]
    fn reason_falls_back_to_status() {
        assert_eq!(error_reason(&HttpResponse::new(502, "<html>bad gateway</html>")), "HTTP 502");
        assert_eq!(error_reason(&HttpResponse::new(400, r#"{"error":true}"#)), "HTTP 400");
        assert_eq!(error_reason(&HttpResponse::new(400, r#"{"reason":""}"#)), "HTTP 400");
        assert_eq!(error_reason(&HttpResponse::new(503, "")), "HTTP 503");
    }

    #[test]
    fn success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
    }
}
