//! Local stand-in for the nflverse file host

use std::net::SocketAddr;

use axum::{extract::Path, http::StatusCode, routing::get, Router};

use crate::config::SourceUrls;
use crate::nflverse::NflData;

pub const GAMES_CSV: &str = "\
game_id,season,game_type,week,away_team,away_score,home_team,home_score,location,result
2023_01_CHI_GB,2023,REG,1,CHI,20,GB,38,Home,18
2024_01_TEN_CHI,2024,REG,1,TEN,17,CHI,24,Home,7
2024_02_CHI_HOU,2024,REG,2,CHI,13,HOU,19,Home,6
2024_03_CHI_IND,2024,REG,3,CHI,16,IND,21,Home,5
2024_04_LA_CHI,2024,REG,4,LA,18,CHI,24,Home,6
2024_05_CAR_CHI,2024,REG,5,CAR,10,CHI,36,Home,26
2024_06_MIN_DET,2024,REG,6,MIN,20,DET,20,Home,0
2024_18_GB_CHI,2024,REG,18,GB,NA,CHI,NA,Home,NA
";

pub const TEAMS_CSV: &str = "\
team_abbr,team_name,team_id,team_nick,team_conf,team_division
CHI,Chicago Bears,810,Bears,NFC,NFC North
DET,Detroit Lions,1540,Lions,NFC,NFC North
GB,Green Bay Packers,1800,Packers,NFC,NFC North
MIN,Minnesota Vikings,3000,Vikings,NFC,NFC North
HOU,Houston Texans,2120,Texans,AFC,AFC South
IND,Indianapolis Colts,2200,Colts,AFC,AFC South
TEN,Tennessee Titans,2100,Titans,AFC,AFC South
CAR,Carolina Panthers,750,Panthers,NFC,NFC South
";

pub const ROSTER_CSV: &str = "\
season,team,position,depth_chart_position,jersey_number,status,full_name,college,years_exp,headshot_url
2024,CHI,QB,QB,18,ACT,Caleb Williams,USC,0,https://static.www.nfl.com/caleb.png
2024,CHI,WR,WR,13,ACT,Keenan Allen,California,11,NA
2024,GB,QB,QB,10,ACT,Jordan Love,Utah State,4,https://static.www.nfl.com/love.png
";

/// Schedule whose first data row has a non-numeric season
pub const MALFORMED_GAMES_CSV: &str = "\
game_id,season,game_type,week,away_team,away_score,home_team,home_score,location,result
2024_01_GB_CHI,abc,REG,1,GB,2,CHI,1,Home,-1
";

/// Which files the stand-in host serves successfully
#[derive(Clone, Copy)]
pub struct Upstream {
    pub schedules: bool,
    pub teams: bool,
    pub rosters: bool,
    /// Body served for `games.csv`
    pub games: &'static str,
}

impl Upstream {
    pub fn healthy() -> Self {
        Upstream {
            schedules: true,
            teams: true,
            rosters: true,
            games: GAMES_CSV,
        }
    }

    pub fn malformed_schedule() -> Self {
        Upstream {
            games: MALFORMED_GAMES_CSV,
            ..Upstream::healthy()
        }
    }

    pub fn failing() -> Self {
        Upstream {
            schedules: false,
            teams: false,
            rosters: false,
            games: GAMES_CSV,
        }
    }
}

pub struct RunningUpstream {
    pub addr: SocketAddr,
}

impl RunningUpstream {
    pub fn urls(&self) -> SourceUrls {
        SourceUrls {
            schedules: format!("http://{}/games.csv", self.addr),
            teams: format!("http://{}/teams.csv", self.addr),
            roster: format!("http://{}/rosters/roster_{{year}}.csv", self.addr),
        }
    }

    pub fn client(&self) -> NflData {
        NflData::new(self.urls(), None).expect("client builds")
    }
}

fn serve(ok: bool, body: &'static str) -> Result<&'static str, (StatusCode, &'static str)> {
    if ok {
        Ok(body)
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable"))
    }
}

pub async fn spawn_upstream(upstream: Upstream) -> RunningUpstream {
    let app = Router::new()
        .route("/games.csv", get(move || async move { serve(upstream.schedules, upstream.games) }))
        .route("/teams.csv", get(move || async move { serve(upstream.teams, TEAMS_CSV) }))
        .route(
            "/rosters/{file}",
            get(move |Path(file): Path<String>| async move {
                if file == "roster_2024.csv" {
                    serve(upstream.rosters, ROSTER_CSV)
                } else {
                    Err((StatusCode::NOT_FOUND, "Not Found"))
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stand-in upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stand-in upstream");
    });

    RunningUpstream { addr }
}

/// Client pointed at a port nothing listens on
pub fn unreachable_client() -> NflData {
    let urls = SourceUrls {
        schedules: "http://127.0.0.1:9/games.csv".to_string(),
        teams: "http://127.0.0.1:9/teams.csv".to_string(),
        roster: "http://127.0.0.1:9/roster_{year}.csv".to_string(),
    };
    NflData::new(urls, None).expect("client builds")
}
