use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::SourceUrls;
use crate::error::DataError;
use crate::models::*;

/// First season with schedule data
pub const FIRST_SCHEDULE_SEASON: i32 = 1999;
/// First season with roster data
pub const FIRST_ROSTER_SEASON: i32 = 1920;

/// HTTP access to the nflverse CSV releases. Cloning is cheap; the inner
/// client is reference counted.
#[derive(Clone)]
pub struct NflData {
    client: Client,
    urls: SourceUrls,
}

impl NflData {
    pub fn new(urls: SourceUrls, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(NflData {
            client: builder.build()?,
            urls,
        })
    }

    /// Completed games for a season
    pub async fn schedule(&self, year: i32) -> Result<Vec<Game>, DataError> {
        check_year(year, FIRST_SCHEDULE_SEASON)?;

        let rows: Vec<ScheduleRow> = self.fetch_csv(&self.urls.schedules).await?;
        let games: Vec<Game> = rows
            .iter()
            .filter(|row| row.season == year)
            .filter_map(ScheduleRow::to_game)
            .collect();

        tracing::debug!("Loaded {} completed games for {}", games.len(), year);
        Ok(games)
    }

    /// Conference/division metadata keyed by team code
    pub async fn team_descriptions(&self) -> Result<HashMap<String, TeamMeta>, DataError> {
        let rows: Vec<TeamRow> = self.fetch_csv(&self.urls.teams).await?;
        Ok(rows
            .iter()
            .map(|row| (row.team_abbr.clone(), row.to_team_meta()))
            .collect())
    }

    /// Season roster for one team
    pub async fn roster(&self, year: i32, team: &str) -> Result<Vec<RosterEntry>, DataError> {
        check_year(year, FIRST_ROSTER_SEASON)?;

        let url = self.urls.roster_url(year);
        let rows: Vec<RosterRow> = self.fetch_csv(&url).await?;
        Ok(rows
            .iter()
            .filter(|row| row.belongs_to(team, year))
            .map(RosterRow::to_roster_entry)
            .collect())
    }

    async fn fetch_csv<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, DataError> {
        tracing::debug!("Fetching {}", url);

        let http_err = |source| DataError::Http {
            url: url.to_string(),
            source,
        };
        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(http_err)?
            .bytes()
            .await
            .map_err(http_err)?;

        parse_csv(&body).map_err(|source| DataError::Csv {
            url: url.to_string(),
            source,
        })
    }
}

fn check_year(year: i32, first: i32) -> Result<(), DataError> {
    if year < first {
        tracing::warn!("Requested season {} predates available data", year);
        return Err(DataError::YearOutOfRange { first });
    }
    Ok(())
}

pub fn parse_csv<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::Reader::from_reader(body);
    reader.deserialize().collect()
}
