//! End-to-end lookup flow against a stubbed registry.

use async_trait::async_trait;
use crn_lookup::registry::types::SearchResponse;
use crn_lookup::registry::RegistryClient;
use crn_lookup::{CompanyRecord, Crn, LookupError, LookupService};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct StubRegistry {
    items: Vec<CompanyRecord>,
    calls: AtomicUsize,
}

impl StubRegistry {
    fn returning(items: Vec<CompanyRecord>) -> Arc<Self> {
        Arc::new(Self {
            items,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl RegistryClient for StubRegistry {
    async fn search_companies(&self, crn: &str) -> Result<SearchResponse, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(crn, "AB123456", "service must forward the validated text");
        Ok(SearchResponse {
            items: Some(self.items.clone()),
            total_results: Some(self.items.len() as i64),
        })
    }
}

fn sample_records() -> Vec<CompanyRecord> {
    let first = serde_json::json!({
        "company_number": "12345678",
        "title": "ACME TRADING LTD",
        "company_status": "active",
        "company_type": "ltd",
        "address_snippet": "1 Example Street, London",
        "date_of_creation": "2001-05-14",
        "kind": "searchresults#company"
    });
    let second = serde_json::json!({
        "company_number": "OC123456",
        "title": "ACME PARTNERS LLP",
        "company_status": "dissolved"
    });
    vec![
        serde_json::from_value(first).unwrap(),
        serde_json::from_value(second).unwrap(),
    ]
}

#[tokio::test]
async fn valid_crn_flows_through_to_the_exact_upstream_records() {
    let expected = sample_records();
    let registry = StubRegistry::returning(expected.clone());
    let lookup = LookupService::new(registry.clone());

    let crn = Crn::parse("AB123456").expect("alphanumeric CRN must validate");
    let records = lookup.company_records(&crn).await.unwrap();

    assert_eq!(records, expected);
    assert_eq!(registry.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalid_crn_fails_before_any_upstream_call() {
    let registry = StubRegistry::returning(sample_records());
    let _lookup = LookupService::new(registry.clone());

    let err = Crn::parse("msf@£@$SDFSDFSDF12313").unwrap_err();

    assert_eq!(
        err.to_string(),
        "CRN should only contain alphanumeric characters"
    );
    assert_eq!(registry.calls.load(Ordering::SeqCst), 0);
}
