use std::hash::{Hash, Hasher};

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::model::null_as_default;

#[derive(Debug, Default, Deserialize)]
pub struct TeamNames {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short: String,
}

/// Score as it appears on the wire: the API sends both `3` and `"3"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RawScore {
    /// Lenient conversion; anything unreadable counts as zero.
    pub fn value(&self) -> i64 {
        match self {
            RawScore::Number(n) => *n,
            RawScore::Text(s) => leading_integer(s).unwrap_or(0),
            RawScore::Other(_) => 0,
        }
    }
}

/// Optional sign and digits at the start of `s`, so "3 (OT)" reads as 3.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    s[..sign_len + digits_len].parse().ok()
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub names: TeamNames,
    #[serde(default)]
    pub score: Option<RawScore>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Clone, Debug, Default)]
pub struct Team {
    pub uuid: String,
    pub code: String,
    pub full_name: String,
    pub short_name: String,
    pub score: i64,
    pub icon: String,
}

impl Team {
    /// Filename and URL safe form of the short name, e.g. "Frisk Asker" -> "frisk-asker".
    pub fn slug(&self) -> String {
        slugify(&self.short_name)
    }
}

/// æ and ø have no canonical decomposition, so they are substituted before marks are stripped.
pub fn slugify(name: &str) -> String {
    let substituted = name.to_lowercase().replace('æ', "ae").replace('ø', "o");
    let stripped: String = substituted
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();
    stripped.replace(' ', "-")
}

// Identity is the API uuid; names may be edited between seasons.
impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team {
            uuid: record.uuid,
            code: record.code,
            full_name: record.names.full,
            short_name: record.names.short,
            score: record.score.as_ref().map(RawScore::value).unwrap_or(0),
            icon: record.icon,
        }
    }
}
