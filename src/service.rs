//! Lookup service
//!
//! Maps upstream search responses into the ordered record list handed back
//! to the caller.

use crate::crn::Crn;
use crate::error::LookupError;
use crate::registry::types::CompanyRecord;
use crate::registry::RegistryClient;
use std::sync::Arc;
use tracing::debug;

/// Company record lookup against an injected registry client.
pub struct LookupService {
    registry: Arc<dyn RegistryClient>,
}

impl LookupService {
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self { registry }
    }

    /// Fetch the company records matching a validated CRN.
    ///
    /// Issues exactly one upstream query. The CRN format is not re-checked
    /// here; that is [`Crn::parse`]'s job. No matches is an empty list, not
    /// an error; upstream failures propagate unchanged.
    pub async fn company_records(&self, crn: &Crn) -> Result<Vec<CompanyRecord>, LookupError> {
        let response = self.registry.search_companies(crn.as_str()).await?;
        let records = response.items.unwrap_or_default();
        debug!(
            crn = %crn,
            count = records.len(),
            total_results = ?response.total_results,
            "mapped upstream search response"
        );
        Ok(records)
    }
}
