use serde::{Deserialize, Serialize};

use super::serde_helpers::{base64_bytes, u64_string};

/// Mirror of `cosmos.base.query.v1beta1.PageRequest`.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub key: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "u64_string")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "u64_string")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

impl PageRequest {
    /// Request continuing after `next_key` of a previous page.
    pub fn after(next_key: Vec<u8>) -> Self {
        PageRequest {
            key: next_key,
            ..Default::default()
        }
    }

    /// Query string parameters for the REST gateway, default fields are skipped.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![];

        if !self.key.is_empty() {
            params.push((
                "pagination.key".to_string(),
                String::from_utf8_lossy(&subtle_encoding::base64::encode(&self.key)).into_owned(),
            ));
        }
        if self.offset != 0 {
            params.push(("pagination.offset".to_string(), self.offset.to_string()));
        }
        if self.limit != 0 {
            params.push(("pagination.limit".to_string(), self.limit.to_string()));
        }
        if self.count_total {
            params.push(("pagination.count_total".to_string(), "true".to_string()));
        }
        if self.reverse {
            params.push(("pagination.reverse".to_string(), "true".to_string()));
        }

        params
    }
}

/// Mirror of `cosmos.base.query.v1beta1.PageResponse`.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct PageResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "base64_bytes")]
    pub next_key: ::prost::alloc::vec::Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "u64_string")]
    pub total: u64,
}

/// Next page to request, `None` once the last page was returned.
pub(crate) fn next_page(pagination: Option<PageResponse>) -> Option<PageRequest> {
    pagination
        .filter(|page| !page.next_key.is_empty())
        .map(|page| PageRequest::after(page.next_key))
}
