use serde::Deserialize;

use crate::model::null_as_default;

/// Language tag whose translation is used as the season display name.
pub const PRIMARY_LANGUAGE: &str = "no";

#[derive(Debug, Deserialize)]
pub struct Translation {
    pub language: String,
    pub translation: String,
}

#[derive(Debug, Deserialize)]
pub struct SeasonRecord {
    uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    names: Vec<Translation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Season {
    pub uuid: String,
    pub name: String,
}

impl Season {
    /// Pick the primary-language name, falling back to the first entry.
    pub fn select_name(names: Vec<Translation>) -> String {
        let mut fallback: Option<String> = None;
        for entry in names {
            if entry.language == PRIMARY_LANGUAGE {
                return entry.translation;
            }
            if fallback.is_none() {
                fallback = Some(entry.translation);
            }
        }
        fallback.unwrap_or_default()
    }
}

impl From<SeasonRecord> for Season {
    fn from(record: SeasonRecord) -> Self {
        Season {
            uuid: record.uuid,
            name: Season::select_name(record.names),
        }
    }
}
