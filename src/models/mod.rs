use serde::{Deserialize, Serialize};

/// Label used when a team code has no conference/division metadata
pub const UNKNOWN: &str = "Unknown";

/// A completed game, home perspective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    /// home_score - away_score as reported by the provider
    pub result: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Tie,
}

impl Game {
    pub fn outcome(&self) -> Outcome {
        match self.result.signum() {
            1 => Outcome::HomeWin,
            -1 => Outcome::AwayWin,
            _ => Outcome::Tie,
        }
    }
}

/// Row from the schedule CSV. Unplayed games carry `NA` or nothing in the
/// score and result columns.
#[derive(Debug, Deserialize)]
pub struct ScheduleRow {
    pub season: i32,
    pub home_team: String,
    pub away_team: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub away_score: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub result: Option<i32>,
}

impl ScheduleRow {
    /// Convert a schedule row into a completed game, if it has been played
    pub fn to_game(&self) -> Option<Game> {
        Some(Game {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score: self.home_score?,
            away_score: self.away_score?,
            result: self.result?,
        })
    }
}

/// Conference and division for one team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMeta {
    pub conference: String,
    pub division: String,
}

/// Row from the team description CSV
#[derive(Debug, Deserialize)]
pub struct TeamRow {
    pub team_abbr: String,
    #[serde(default)]
    pub team_conf: Option<String>,
    #[serde(default)]
    pub team_division: Option<String>,
}

impl TeamRow {
    pub fn to_team_meta(&self) -> TeamMeta {
        TeamMeta {
            conference: non_empty(&self.team_conf).unwrap_or_else(|| UNKNOWN.to_string()),
            division: non_empty(&self.team_division).unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Season record for one team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub win_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
}

impl TeamStanding {
    /// Zero record for a team that has not completed a game yet
    pub fn placeholder(team: &str) -> Self {
        TeamStanding {
            team_name: team.to_string(),
            wins: 0,
            losses: 0,
            ties: 0,
            points_for: 0,
            points_against: 0,
            win_pct: 0.0,
            conference: None,
            division: None,
        }
    }
}

/// Player entry for roster display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub player_name: String,
    pub position: String,
    pub jersey_number: String,
    pub status: String,
    pub college: String,
    pub years_exp: String,
    pub headshot_url: String,
}

/// Row from the seasonal roster CSV. Any of these columns may be missing
/// depending on the season's file layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RosterRow {
    pub season: Option<String>,
    pub team: Option<String>,
    pub player_name: Option<String>,
    /// Newer files name the player column `full_name`
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<String>,
    pub status: Option<String>,
    pub college: Option<String>,
    pub years_exp: Option<String>,
    pub headshot_url: Option<String>,
}

impl RosterRow {
    pub fn belongs_to(&self, team: &str, year: i32) -> bool {
        let team_matches = non_empty(&self.team).is_some_and(|t| t == team);
        // Older files have no season column; the file itself is per season.
        let season_matches = match non_empty(&self.season) {
            Some(season) => season.parse::<i32>().is_ok_and(|s| s == year),
            None => true,
        };
        team_matches && season_matches
    }

    pub fn to_roster_entry(&self) -> RosterEntry {
        RosterEntry {
            player_name: non_empty(&self.player_name)
                .or_else(|| non_empty(&self.full_name))
                .unwrap_or_default(),
            position: non_empty(&self.position).unwrap_or_default(),
            jersey_number: non_empty(&self.jersey_number).unwrap_or_default(),
            status: non_empty(&self.status).unwrap_or_default(),
            college: non_empty(&self.college).unwrap_or_default(),
            years_exp: non_empty(&self.years_exp).unwrap_or_default(),
            headshot_url: non_empty(&self.headshot_url).unwrap_or_default(),
        }
    }
}

/// Treat empty and `NA` cells as missing
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "NA")
        .map(str::to_string)
}

/// Response wrapper used by every data endpoint
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
