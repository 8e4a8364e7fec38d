use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::models::MessageResponse;
use crate::nflverse::NflData;

pub mod bears;
pub mod health;
pub mod standings;

/// Shared by every handler; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub data: NflData,
    /// Team code served by the `/bears` endpoints
    pub featured_team: String,
}

pub fn router(state: AppState) -> Router {
    // Any origin may read the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(root))
        .route("/health", get(health::health_check))

        // Standings endpoints
        .route("/api/sports/standings/{year}", get(standings::get_standings))

        // Featured team endpoints
        .route("/api/sports/bears/summary/{year}", get(bears::get_summary))
        .route("/api/sports/bears/roster/{year}", get(bears::get_roster))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Sports Service is running".to_string(),
    })
}
