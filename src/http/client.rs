//! Low-level HTTP client — `CoinfolioHttp`.
//!
//! The shared request helper: joins a path suffix onto the configured base
//! URL, sends uniform JSON headers, raises a uniform error on non-2xx and
//! decodes the JSON body otherwise. One instance is shared by all
//! sub-clients; it holds no mutable state.

use crate::error::HttpError;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Coinfolio REST API.
#[derive(Clone)]
pub struct CoinfolioHttp {
    base_url: String,
    client: Client,
}

impl CoinfolioHttp {
    /// Build a client against `base_url`.
    ///
    /// No request timeout is applied unless one is given — the backend is
    /// expected to be local and fast; callers wanting a bound pass one via
    /// the builder.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.do_request(Method::GET, path, None::<&()>).await
    }

    /// POST a JSON `body` to `path` and decode the JSON response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(Method::POST, path, Some(body)).await
    }

    /// POST to `path` with no body and decode the JSON response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.do_request(Method::POST, path, None::<&()>).await
    }

    /// DELETE `path`. The backend answers these with an empty body, so the
    /// response is not JSON-decoded.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = "DELETE", url = %url, "dispatching request");

        let resp = self.client.delete(url.as_str()).send().await?;
        if resp.status().is_success() {
            return Ok(());
        }
        Err(reject(resp).await)
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "dispatching request");

        let mut req = self.client.request(method, url.as_str());
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp.json::<T>().await?);
        }
        Err(reject(resp).await)
    }
}

/// Turn a non-success response into the uniform status error.
async fn reject(resp: Response) -> HttpError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !body.is_empty() {
        tracing::debug!(status = status.as_u16(), body = %body, "request rejected");
    }
    HttpError::from_status(status.as_u16(), status.canonical_reason())
}
