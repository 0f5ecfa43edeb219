use std::error::Error;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use travel_server::config::AppConfig;
use travel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("travel_server=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config)?;
    info!(generator = state.generator.name(), "itinerary generator ready");

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Lanzarote travel planner listening");
    info!("  GET  /health       - Health check");
    info!("  GET  /results      - Search (HTML or JSON)");
    info!("  POST /api/options  - Search (JSON body)");
    info!("  POST /booking      - Booking details");

    axum::serve(listener, app).await?;
    Ok(())
}
