//! Session carrier - one cookie-bearing HTTP client shared by every check

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::error::{ProbeError, Result};

/// Status and decoded JSON body of one REST call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    /// `Value::Null` when the body was empty or not JSON
    pub body: Value,
}

impl ApiResponse {
    /// True for `200 OK`
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// True when the body carries `"success": true`
    pub fn success_flag(&self) -> bool {
        self.body["success"].as_bool().unwrap_or(false)
    }

    /// Length of the array at `key`, 0 when absent or not an array
    pub fn list_len(&self, key: &str) -> usize {
        self.body[key].as_array().map(Vec::len).unwrap_or(0)
    }
}

/// HTTP session holding the auth cookie across calls.
///
/// Login and logout responses rewrite the cookie jar, so the order in
/// which checks use the session matters.
pub struct Session {
    client: Client,
    base_url: String,
}

impl Session {
    /// Create a session rooted at `base_url` (e.g. `http://localhost:3000/api`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ProbeError::InvalidUrl(base_url));
        }

        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL all paths are joined onto
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and decode the reply.
    ///
    /// Only transport failures are errors; any HTTP status is returned as-is.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                debug!("{} {}: body is not JSON: {}", method, path, e);
                Value::Null
            })
        };

        debug!("{} {} -> {}", method, path, status);
        Ok(ApiResponse { status, body })
    }

    /// GET without a body
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<ApiResponse> {
        self.request(Method::GET, path, None, query).await
    }

    /// POST, optionally with a JSON body
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse> {
        self.request(Method::POST, path, body, &[]).await
    }

    /// DELETE without a body
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, None, &[]).await
    }
}
