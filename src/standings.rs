use std::collections::{BTreeMap, HashMap};

use crate::error::DataError;
use crate::models::{Game, Outcome, TeamMeta, TeamStanding, UNKNOWN};
use crate::nflverse::NflData;

/// Running totals for one team while folding a season's games
#[derive(Debug, Default, Clone, Copy)]
struct Record {
    wins: u32,
    losses: u32,
    ties: u32,
    points_for: u32,
    points_against: u32,
}

impl Record {
    fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Ties count as half a win
    fn win_pct(&self) -> f64 {
        let total = self.games_played();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.ties as f64) / total as f64
    }
}

/// Fetch a season's games and team metadata, then aggregate standings
pub async fn season_standings(data: &NflData, year: i32) -> Result<Vec<TeamStanding>, DataError> {
    let games = data.schedule(year).await?;
    let teams = data.team_descriptions().await?;
    Ok(calculate_standings(&games, &teams))
}

/// Fold completed games into one standing per participating team, ordered by
/// team code.
pub fn calculate_standings(games: &[Game], teams: &HashMap<String, TeamMeta>) -> Vec<TeamStanding> {
    let mut records: BTreeMap<&str, Record> = BTreeMap::new();

    for game in games {
        let home = records.entry(game.home_team.as_str()).or_default();
        home.points_for += game.home_score;
        home.points_against += game.away_score;
        match game.outcome() {
            Outcome::HomeWin => home.wins += 1,
            Outcome::AwayWin => home.losses += 1,
            Outcome::Tie => home.ties += 1,
        }

        let away = records.entry(game.away_team.as_str()).or_default();
        away.points_for += game.away_score;
        away.points_against += game.home_score;
        match game.outcome() {
            Outcome::HomeWin => away.losses += 1,
            Outcome::AwayWin => away.wins += 1,
            Outcome::Tie => away.ties += 1,
        }
    }

    records
        .into_iter()
        .map(|(team, record)| {
            let (conference, division) = match teams.get(team) {
                Some(meta) => (meta.conference.clone(), meta.division.clone()),
                None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
            };
            TeamStanding {
                team_name: team.to_string(),
                wins: record.wins,
                losses: record.losses,
                ties: record.ties,
                points_for: record.points_for,
                points_against: record.points_against,
                win_pct: record.win_pct(),
                conference: Some(conference),
                division: Some(division),
            }
        })
        .collect()
}

/// Pick one team's standing, or a zeroed placeholder if it has not played
pub fn team_summary(standings: Vec<TeamStanding>, team: &str) -> TeamStanding {
    standings
        .into_iter()
        .find(|s| s.team_name == team)
        .unwrap_or_else(|| TeamStanding::placeholder(team))
}
