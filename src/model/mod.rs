pub mod game;
pub mod season;
pub mod team;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

pub use game::Game;
pub use season::Season;
pub use team::Team;

/// Failure turning a response body into domain values.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game {game}: invalid start time {value:?}: {source}")]
    InvalidTimestamp {
        game: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Treat an explicit JSON `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct SeasonsResponse {
    season: Vec<season::SeasonRecord>,
}

#[derive(Debug, Deserialize)]
struct GamesResponse {
    #[serde(rename = "gameInfo")]
    game_info: Vec<game::GameRecord>,
}

/// Decode the body of the season filter endpoint.
pub fn parse_seasons(body: &str) -> Result<Vec<Season>, DecodeError> {
    let response: SeasonsResponse = serde_json::from_str(body)?;
    Ok(response.season.into_iter().map(Season::from).collect())
}

/// Decode the body of the game schedule endpoint. A single bad game fails the whole list.
pub fn parse_games(body: &str) -> Result<Vec<Game>, DecodeError> {
    let response: GamesResponse = serde_json::from_str(body)?;
    response.game_info.into_iter().map(Game::try_from).collect()
}
