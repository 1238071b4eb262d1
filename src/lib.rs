//! CRN lookup service
//!
//! Validates Company Registration Numbers and retrieves matching company
//! records from the UK Companies House search API.
//!
//! Control flow: caller -> [`Crn::parse`] (fail fast) -> [`LookupService`] ->
//! caller. Validation never touches the network; the service issues exactly
//! one upstream query per call and hands the records back in upstream order.

pub mod crn;
pub mod error;
pub mod registry;
pub mod server;
pub mod service;

pub use crn::Crn;
pub use error::LookupError;
pub use registry::types::CompanyRecord;
pub use service::LookupService;
