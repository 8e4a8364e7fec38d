use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::{DataResponse, RosterEntry, TeamStanding};
use crate::routes::AppState;
use crate::standings;

/// GET /api/sports/bears/summary/{year} - Featured team's record
pub async fn get_summary(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<DataResponse<TeamStanding>>, ApiError> {
    let all = standings::season_standings(&state.data, year)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching {} summary for {}: {}", state.featured_team, year, e);
            e
        })?;

    let data = standings::team_summary(all, &state.featured_team);
    Ok(Json(DataResponse { data }))
}

/// GET /api/sports/bears/roster/{year} - Featured team's season roster
pub async fn get_roster(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<DataResponse<Vec<RosterEntry>>>, ApiError> {
    let data = state
        .data
        .roster(year, &state.featured_team)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching {} roster for {}: {}", state.featured_team, year, e);
            e
        })?;

    Ok(Json(DataResponse { data }))
}
