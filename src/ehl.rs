use std::collections::HashSet;

use tracing::{error, info, info_span, instrument};
use ureq::Agent;

use crate::error::{Error, Result};
use crate::model::{self, Game, Season, Team};

pub const DEFAULT_BASE_URL: &str = "https://www.ehl.no";
/// EliteHockey Ligaen
pub const SERIES_UUID: &str = "qUu-397s1Dpwm";
/// Regular season
pub const GAME_TYPE_UUID: &str = "qQ9-af37Ti40B";

const SEASONS_PATH: &str = "/api/sports-v2/season-series-game-types-filter";
const GAMES_PATH: &str = "/api/sports-v2/game-schedule";

/// Blocking client for the EHL sports API.
#[derive(Debug, Clone)]
pub struct EhlClient {
    base_url: String,
    agent: Agent,
}

impl Default for EhlClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl EhlClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // Status codes are checked by hand so they map onto UnexpectedStatus.
        let config = Agent::config_builder().http_status_as_error(false).build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent: Agent::new_with_config(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All seasons of the series, newest first.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_seasons(&self) -> Result<Vec<Season>> {
        let url = format!("{}{}", self.base_url, SEASONS_PATH);
        let query = [("series", SERIES_UUID)];
        let body = self.get(&url, &query)?;
        let seasons = model::parse_seasons(&body).map_err(|source| {
            error!(error = %source, url = %url, "Failed to decode seasons response");
            Error::Decode { url: url.clone(), source }
        })?;
        info!(count = seasons.len(), "Fetched seasons");
        Ok(seasons)
    }

    /// The first season the API lists.
    pub fn current_season(&self) -> Result<Season> {
        self.fetch_seasons()?
            .into_iter()
            .next()
            .ok_or_else(|| Error::EmptyResult { url: format!("{}{}", self.base_url, SEASONS_PATH) })
    }

    /// Every regular season game of `season_id`, played or not, home and away.
    #[instrument(level = "info", skip(self))]
    pub fn fetch_games(&self, season_id: &str) -> Result<Vec<Game>> {
        let url = format!("{}{}", self.base_url, GAMES_PATH);
        let query = [
            ("seasonUuid", season_id),
            ("seriesUuid", SERIES_UUID),
            ("gameTypeUuid", GAME_TYPE_UUID),
            ("gamePlace", "all"),
            ("played", "all"),
        ];
        let body = self.get(&url, &query)?;
        let games = model::parse_games(&body).map_err(|source| {
            error!(error = %source, url = %url, "Failed to decode games response");
            Error::Decode { url: url.clone(), source }
        })?;
        info!(count = games.len(), "Fetched games");
        Ok(games)
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = {
            let _span = info_span!("ehl_fetch", url = %url).entered();
            let mut request = self.agent.get(url);
            for (key, value) in query {
                request = request.query(key, value);
            }
            request.call()
        };
        let response = response.map_err(|source| {
            error!(error = %source, url = %url, "Request failed");
            Error::Transport { url: url.to_string(), source }
        })?;

        let status = response.status().as_u16();
        if status != 200 {
            error!(status, url = %url, "Unexpected status code");
            return Err(Error::UnexpectedStatus { url: url.to_string(), status });
        }

        let mut body_reader = response.into_body();
        body_reader.read_to_string().map_err(|source| {
            error!(error = %source, url = %url, "Failed to read response body");
            Error::Transport { url: url.to_string(), source }
        })
    }
}

/// Unique teams of `games` by uuid, in order of first appearance.
pub fn extract_teams(games: &[Game]) -> Vec<Team> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut teams = Vec::new();
    for game in games {
        for team in [&game.home_team, &game.away_team] {
            if seen.insert(team.uuid.as_str()) {
                teams.push(team.clone());
            }
        }
    }
    teams
}
