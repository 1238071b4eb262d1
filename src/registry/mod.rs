//! Upstream registry access.
//!
//! [`RegistryClient`] is the seam between the lookup service and the real
//! Companies House transport, so tests can substitute a stub.

mod client;
pub mod types;

pub use client::CompaniesHouseClient;

use crate::error::LookupError;
use async_trait::async_trait;
use types::SearchResponse;

/// Abstract capability to query the upstream registry by CRN.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Issue one search query keyed by the CRN text.
    async fn search_companies(&self, crn: &str) -> Result<SearchResponse, LookupError>;
}
