use std::fmt::Display;

use chrono::{DateTime, TimeDelta, Utc};

use crate::alarm::{self, Alarm};
use crate::model::Game;

pub const PRODID: &str = "-//Hockeykalender//EHL//NO";
/// Suffix of every event UID.
pub const UID_DOMAIN: &str = "ehl.hockeykalender";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Games carry no end time; every event is blocked out for two hours.
pub fn game_duration() -> TimeDelta {
    TimeDelta::hours(2)
}

/// Calendar title, e.g. "EHL 2025/2026" or "Vålerenga - EHL 2025/2026".
pub fn calendar_name(team_filter: Option<&str>, season_name: &str) -> String {
    match team_filter {
        Some(team) => format!("{team} - EHL {season_name}"),
        None => format!("EHL {season_name}"),
    }
}

/// Render an iCalendar document for `games`.
///
/// With a team filter only games where that short name plays are kept, in
/// input order. `now_utc` becomes DTSTAMP on every event; pass a fixed
/// instant to get reproducible output.
pub fn generate_calendar(
    games: &[Game],
    team_filter: Option<&str>,
    alarms: &[Alarm],
    season_name: &str,
    now_utc: DateTime<Utc>,
) -> String {
    let team_filter = team_filter.filter(|t| !t.is_empty());
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_property(&mut out, "PRODID", PRODID);
    push_line(&mut out, "CALSCALE:GREGORIAN");
    push_line(&mut out, "METHOD:PUBLISH");
    push_property(&mut out, "X-WR-CALNAME", calendar_name(team_filter, season_name));

    let dtstamp = now_utc.format(TIMESTAMP_FORMAT).to_string();
    for game in games
        .iter()
        .filter(|g| team_filter.is_none_or(|team| g.involves_team(team)))
    {
        push_event(&mut out, game, alarms, &dtstamp);
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, game: &Game, alarms: &[Alarm], dtstamp: &str) {
    let summary = game.summary();
    let start = game.start_time;
    let end = start + game_duration();

    push_line(out, "BEGIN:VEVENT");
    push_property(out, "UID", format!("{}@{}", game.uuid, UID_DOMAIN));
    push_property(out, "DTSTAMP", dtstamp);
    push_property(out, "DTSTART", start.format(TIMESTAMP_FORMAT));
    push_property(out, "DTEND", end.format(TIMESTAMP_FORMAT));
    push_property(out, "SUMMARY", &summary);
    push_property(out, "LOCATION", &game.venue);
    for alarm in alarms {
        push_line(out, &alarm::format_valarm(*alarm, &summary));
    }
    push_line(out, "END:VEVENT");
}

/// Content lines are CRLF terminated.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

fn push_property(out: &mut String, name: &str, value: impl Display) {
    push_line(out, &format!("{name}:{value}"));
}
