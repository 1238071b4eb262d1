//! Companies House search API response types.
//!
//! Reference: https://api.company-information.service.gov.uk/search/companies

use serde::{Deserialize, Serialize};

/// Top-level search response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Matched companies in the order the API returned them. Absent or
    /// `null` means no matches.
    #[serde(default)]
    pub items: Option<Vec<CompanyRecord>>,
    #[serde(default)]
    pub total_results: Option<i64>,
}

/// One matched company from a search response.
///
/// Known fields are typed; anything else the API sends is carried through
/// untouched in `extra` and re-emitted on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_number: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_creation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
