use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::alarm::{self, Alarm};
use crate::error::{Error, Result};
use crate::ical;
use crate::model::{Game, Team};

/// Slug used for the league-wide calendar.
pub const LEAGUE_SLUG: &str = "ehl";

/// Static pages copied next to the calendars.
pub const WEB_FILES: [&str; 2] = ["index.html", "style.css"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub files_written: usize,
    pub total_bytes: u64,
}

impl Stats {
    fn record(&mut self, content: &str) {
        self.files_written += 1;
        self.total_bytes += content.len() as u64;
    }
}

/// `{slug}.ics`, or `{slug}-{suffix}.ics` when alarms are present.
pub fn filename(slug: &str, alarms: &[Alarm]) -> String {
    let suffix = alarm::alarm_set_suffix(alarms);
    if suffix.is_empty() {
        format!("{slug}.ics")
    } else {
        format!("{slug}-{suffix}.ics")
    }
}

pub fn write_calendar(dir: &Path, filename: &str, content: &str) -> Result<()> {
    let path = dir.join(filename);
    fs::write(&path, content).map_err(|e| Error::io(path, e))?;
    debug!(file = filename, bytes = content.len(), "Wrote calendar");
    Ok(())
}

/// Write every team calendar and the league calendar in all alarm variants,
/// `(teams.len() + 1) * 16` files in total. Stops at the first failed write;
/// files already written stay on disk.
#[instrument(level = "info", skip(games, teams, now_utc), fields(games = games.len(), teams = teams.len()))]
pub fn generate_all_calendars(
    dir: &Path,
    games: &[Game],
    teams: &[Team],
    season_name: &str,
    now_utc: DateTime<Utc>,
) -> Result<Stats> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let combinations = alarm::alarm_combinations();
    let mut stats = Stats::default();

    for team in teams {
        let slug = team.slug();
        for alarms in &combinations {
            let content = ical::generate_calendar(games, Some(&team.short_name), alarms, season_name, now_utc);
            write_calendar(dir, &filename(&slug, alarms), &content)?;
            stats.record(&content);
        }
    }

    for alarms in &combinations {
        let content = ical::generate_calendar(games, None, alarms, season_name, now_utc);
        write_calendar(dir, &filename(LEAGUE_SLUG, alarms), &content)?;
        stats.record(&content);
    }

    info!(files = stats.files_written, bytes = stats.total_bytes, "Generated calendars");
    Ok(stats)
}

/// Copy the static site from `web_dir` into `output_dir` unchanged.
pub fn copy_web_files(web_dir: &Path, output_dir: &Path) -> Result<()> {
    for name in WEB_FILES {
        let src = web_dir.join(name);
        let dst = output_dir.join(name);
        fs::copy(&src, &dst).map_err(|e| Error::io(src, e))?;
        debug!(file = name, "Copied web file");
    }
    Ok(())
}
