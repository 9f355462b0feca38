use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::errors::{FeeShareResult, TransportError};

/// Raw answer of the REST gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RestResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        RestResponse {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Decode the body, non success statuses become [`TransportError::Status`].
    pub fn json<T: DeserializeOwned>(self) -> FeeShareResult<T> {
        if !self.is_success() {
            return Err(TransportError::Status {
                status: self.status,
                body: String::from_utf8_lossy(&self.body).into_owned(),
            }
            .into());
        }

        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// GET/POST a JSON path relative to the node REST base url.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn get(&self, path: &str, params: &[(String, String)]) -> FeeShareResult<RestResponse>;

    async fn post(&self, path: &str, body: &serde_json::Value) -> FeeShareResult<RestResponse>;
}

#[derive(Clone, Debug)]
pub struct HttpRestClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRestClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FeeShareResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(HttpRestClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn into_response(res: reqwest::Response) -> FeeShareResult<RestResponse> {
        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();

        trace!(status, len = body.len(), "rest response");

        Ok(RestResponse { status, body })
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn get(&self, path: &str, params: &[(String, String)]) -> FeeShareResult<RestResponse> {
        let res = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(params)
            .send()
            .await?;

        Self::into_response(res).await
    }

    async fn post(&self, path: &str, body: &serde_json::Value) -> FeeShareResult<RestResponse> {
        let res = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;

        Self::into_response(res).await
    }
}
