use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_SCHEDULES_URL: &str =
    "https://github.com/nflverse/nfldata/raw/master/data/games.csv";
pub const DEFAULT_TEAMS_URL: &str =
    "https://github.com/nflverse/nflverse-pbp/raw/master/teams_colors_logos.csv";
pub const DEFAULT_ROSTER_URL: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/rosters/roster_{year}.csv";

/// Chicago, served by the `/bears` endpoints
pub const DEFAULT_FEATURED_TEAM: &str = "CHI";

/// Where the upstream CSV files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub schedules: String,
    pub teams: String,
    /// Contains a `{year}` placeholder
    pub roster: String,
}

impl SourceUrls {
    pub fn roster_url(&self, year: i32) -> String {
        self.roster.replace("{year}", &year.to_string())
    }
}

impl Default for SourceUrls {
    fn default() -> Self {
        SourceUrls {
            schedules: DEFAULT_SCHEDULES_URL.to_string(),
            teams: DEFAULT_TEAMS_URL.to_string(),
            roster: DEFAULT_ROSTER_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub featured_team: String,
    pub sources: SourceUrls,
    pub http_timeout: Option<Duration>,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: Ipv4Addr = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "HOST", value })?,
            None => Ipv4Addr::UNSPECIFIED,
        };

        let port: u16 = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => 8000,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(value.parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    name: "HTTP_TIMEOUT_SECS",
                    value,
                }
            })?)),
            None => None,
        };

        let defaults = SourceUrls::default();
        let sources = SourceUrls {
            schedules: lookup("NFL_SCHEDULES_URL").unwrap_or(defaults.schedules),
            teams: lookup("NFL_TEAMS_URL").unwrap_or(defaults.teams),
            roster: lookup("NFL_ROSTER_URL").unwrap_or(defaults.roster),
        };
        if !sources.roster.contains("{year}") {
            return Err(ConfigError::InvalidValue {
                name: "NFL_ROSTER_URL",
                value: sources.roster,
            });
        }

        let featured_team = lookup("FEATURED_TEAM")
            .map(|team| team.trim().to_uppercase())
            .filter(|team| !team.is_empty())
            .unwrap_or_else(|| DEFAULT_FEATURED_TEAM.to_string());

        Ok(Config {
            host,
            port,
            featured_team,
            sources,
            http_timeout,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}
