mod app;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::services::advisor::AdvisoryService;
use crate::services::llm_service::LlmConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(&logging::LoggingConfig::from_env());

    let llm_config = LlmConfig::from_env();
    let state = AppState {
        advisor: Arc::new(AdvisoryService::new(llm_config)),
    };
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Advisor backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
