use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::{DataResponse, TeamStanding};
use crate::routes::AppState;
use crate::standings;

/// GET /api/sports/standings/{year} - Standings for every team with a completed game
pub async fn get_standings(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<DataResponse<Vec<TeamStanding>>>, ApiError> {
    let data = standings::season_standings(&state.data, year)
        .await
        .map_err(|e| {
            tracing::error!("Error calculating standings for {}: {}", year, e);
            e
        })?;

    Ok(Json(DataResponse { data }))
}
