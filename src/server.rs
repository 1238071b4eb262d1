//! HTTP boundary for the lookup service.
//!
//! The handler validates the CRN before anything upstream is touched;
//! invalid input is answered 400 without a registry call, upstream failures
//! become 502.

use crate::crn::Crn;
use crate::error::LookupError;
use crate::registry::types::CompanyRecord;
use crate::service::LookupService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A [`LookupError`] as it leaves the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            LookupError::InvalidCrn => (StatusCode::BAD_REQUEST, self.0.to_string()),
            LookupError::Upstream { message } => {
                // Full detail stays in the logs; the caller gets a generic line.
                warn!("upstream registry failure: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream registry request failed".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/company/:crn", get(get_company_records))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// GET /api/health
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/company/:crn
async fn get_company_records(
    Path(crn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyRecord>>, ApiError> {
    let crn = Crn::parse(&crn)?;
    let records = state.lookup.company_records(&crn).await?;
    Ok(Json(records))
}
