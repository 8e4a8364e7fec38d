use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod models;
mod nflverse;
mod routes;
mod standings;
#[cfg(test)]
mod test_support;

use config::Config;
use nflverse::NflData;
use routes::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting sports service...");

    dotenvy::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let data = NflData::new(config.sources.clone(), config.http_timeout)
        .expect("Failed to build HTTP client");

    tracing::info!(
        "Serving standings for featured team {} from {}",
        config.featured_team,
        config.sources.schedules
    );

    let app = routes::router(AppState {
        data,
        featured_team: config.featured_team.clone(),
    });

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
