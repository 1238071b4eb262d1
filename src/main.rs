use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use crn_lookup::registry::CompaniesHouseClient;
use crn_lookup::server::{create_router, AppState};
use crn_lookup::service::LookupService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crn_lookup=info,tower_http=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let api_key = std::env::var("COMPANIES_HOUSE_API_KEY")
        .context("COMPANIES_HOUSE_API_KEY environment variable not set")?;

    let registry = match std::env::var("COMPANIES_HOUSE_API_BASE") {
        Ok(base_url) => CompaniesHouseClient::with_base_url(api_key, base_url)?,
        Err(_) => CompaniesHouseClient::new(api_key)?,
    };

    let lookup = Arc::new(LookupService::new(Arc::new(registry)));
    let app = create_router(AppState { lookup });

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
