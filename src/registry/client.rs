//! Companies House API client
//!
//! HTTP client for the UK Companies House search API.

use super::types::SearchResponse;
use super::RegistryClient;
use crate::error::LookupError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const CH_API_BASE: &str = "https://api.company-information.service.gov.uk";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Companies House API client
pub struct CompaniesHouseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CompaniesHouseClient {
    /// Create a new client with the given API key against the production API
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, CH_API_BASE.to_string())
    }

    /// Create a client against a non-default base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Make a GET request with authentication
    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, LookupError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Option::<&str>::None)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LookupError::upstream(format!("failed to fetch {}: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::upstream(format!(
                "Companies House API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        response.json().await.map_err(|e| {
            LookupError::upstream(format!("failed to parse response from {}: {}", path, e))
        })
    }
}

#[async_trait]
impl RegistryClient for CompaniesHouseClient {
    async fn search_companies(&self, crn: &str) -> Result<SearchResponse, LookupError> {
        self.get(&format!("/search/companies?q={}", encode_query_param(crn)))
            .await
    }
}

/// Simple URL encoding for query parameters
///
/// Percent-encodes the UTF-8 bytes of everything outside the unreserved
/// set, so multi-byte characters (which a CRN may legitimately contain)
/// stay valid on the wire.
fn encode_query_param(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    out
}
