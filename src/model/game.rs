use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::model::{DecodeError, null_as_default};
use crate::model::team::{Team, TeamRecord};

/// Layout of `rawStartDateTime`, always UTC with millisecond precision.
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Default, Deserialize)]
pub struct VenueRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// The live API nests teams under `homeTeamInfo`/`awayTeamInfo`; older
/// fixtures and dumps use `homeTeam`/`awayTeam`. Both are accepted; a side
/// missing under both names decodes as an empty team.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub uuid: String,
    pub raw_start_date_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    pub home_team_info: Option<TeamRecord>,
    pub away_team_info: Option<TeamRecord>,
    pub home_team: Option<TeamRecord>,
    pub away_team: Option<TeamRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub venue_info: VenueRecord,
}

#[derive(Clone, Debug)]
pub struct Game {
    pub uuid: String,
    pub start_time: DateTime<Utc>,
    pub state: String,
    pub home_team: Team,
    pub away_team: Team,
    pub venue: String,
}

impl Game {
    pub fn involves_team(&self, short_name: &str) -> bool {
        self.home_team.short_name == short_name || self.away_team.short_name == short_name
    }

    pub fn summary(&self) -> String {
        format!("{} vs {}", self.home_team.short_name, self.away_team.short_name)
    }
}

pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, START_TIME_FORMAT).map(|naive| naive.and_utc())
}

impl TryFrom<GameRecord> for Game {
    type Error = DecodeError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let start_time = parse_start_time(&record.raw_start_date_time).map_err(|source| {
            DecodeError::InvalidTimestamp {
                game: record.uuid.clone(),
                value: record.raw_start_date_time.clone(),
                source,
            }
        })?;

        let home = record.home_team_info.or(record.home_team).unwrap_or_default();
        let away = record.away_team_info.or(record.away_team).unwrap_or_default();

        Ok(Game {
            uuid: record.uuid,
            start_time,
            state: record.state,
            home_team: home.into(),
            away_team: away.into(),
            venue: record.venue_info.name,
        })
    }
}
