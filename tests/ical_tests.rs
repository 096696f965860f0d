use chrono::{DateTime, TimeZone, Utc};
use icalendar::Component;

use hockeykalender::alarm::Alarm;
use hockeykalender::ical::{self, generate_calendar};
use hockeykalender::model::{Game, Team};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 12, 30, 0).unwrap()
}

fn team(uuid: &str, code: &str, short_name: &str) -> Team {
    Team {
        uuid: uuid.to_string(),
        code: code.to_string(),
        short_name: short_name.to_string(),
        ..Default::default()
    }
}

fn game(uuid: &str, start: DateTime<Utc>, home: Team, away: Team, venue: &str) -> Game {
    Game {
        uuid: uuid.to_string(),
        start_time: start,
        state: "pre-game".to_string(),
        home_team: home,
        away_team: away,
        venue: venue.to_string(),
    }
}

fn sample_games() -> Vec<Game> {
    let vif = team("team-vif", "VIF", "Vålerenga");
    let sth = team("team-sth", "STH", "Storhamar");
    let fri = team("team-fri", "FRI", "Frisk Asker");
    let oil = team("team-oil", "OIL", "Stavanger Oilers");
    vec![
        game("game-1", Utc.with_ymd_and_hms(2025, 9, 11, 17, 0, 0).unwrap(), vif.clone(), sth.clone(), "Jordal Amfi"),
        game("game-2", Utc.with_ymd_and_hms(2025, 9, 12, 18, 0, 0).unwrap(), sth, vif, "CC Amfi"),
        game("game-3", Utc.with_ymd_and_hms(2025, 9, 13, 19, 0, 0).unwrap(), fri, oil, "Askerhallen"),
    ]
}

#[test]
fn document_has_header_and_footer() {
    let ics = generate_calendar(&sample_games(), None, &[], "2025/2026", now());

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Hockeykalender//EHL//NO\r\nCALSCALE:GREGORIAN\r\nMETHOD:PUBLISH\r\n"), "ics was: {}", ics);
    assert!(ics.ends_with("END:VCALENDAR\r\n"), "ics was: {}", ics);
}

#[test]
fn unfiltered_calendar_contains_every_game() {
    let ics = generate_calendar(&sample_games(), None, &[], "2025/2026", now());

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert!(ics.contains("X-WR-CALNAME:EHL 2025/2026\r\n"), "ics was: {}", ics);
}

#[test]
fn filtered_calendar_keeps_only_team_games_in_order() {
    let ics = generate_calendar(&sample_games(), Some("Vålerenga"), &[], "2025/2026", now());

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("X-WR-CALNAME:Vålerenga - EHL 2025/2026\r\n"), "ics was: {}", ics);
    assert!(!ics.contains("Frisk Asker"), "ics was: {}", ics);
    let first = ics.find("UID:game-1@").expect("game-1 present");
    let second = ics.find("UID:game-2@").expect("game-2 present");
    assert!(first < second);
}

#[test]
fn empty_filter_means_no_filter() {
    let ics = generate_calendar(&sample_games(), Some(""), &[], "2025/2026", now());
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
    assert!(ics.contains("X-WR-CALNAME:EHL 2025/2026\r\n"));
}

#[test]
fn filter_matching_nothing_yields_empty_calendar() {
    let ics = generate_calendar(&sample_games(), Some("Narvik"), &[], "2025/2026", now());
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 0);
    assert!(ics.contains("X-WR-CALNAME:Narvik - EHL 2025/2026\r\n"));
}

#[test]
fn event_fields_are_rendered_in_utc() {
    let games = sample_games();
    let ics = generate_calendar(&games[..1], None, &[], "2025/2026", now());

    assert!(ics.contains("UID:game-1@ehl.hockeykalender\r\n"), "ics was: {}", ics);
    assert!(ics.contains("DTSTAMP:20250801T123000Z\r\n"), "ics was: {}", ics);
    assert!(ics.contains("DTSTART:20250911T170000Z\r\n"), "ics was: {}", ics);
    assert!(ics.contains("DTEND:20250911T190000Z\r\n"), "ics was: {}", ics);
    assert!(ics.contains("SUMMARY:Vålerenga vs Storhamar\r\n"), "ics was: {}", ics);
    assert!(ics.contains("LOCATION:Jordal Amfi\r\n"), "ics was: {}", ics);
}

#[test]
fn fixed_clock_gives_identical_output() {
    let games = sample_games();
    let a = generate_calendar(&games, None, &Alarm::ALL, "2025/2026", now());
    let b = generate_calendar(&games, None, &Alarm::ALL, "2025/2026", now());
    assert_eq!(a, b);
}

#[test]
fn alarms_are_attached_to_each_event() {
    let games = sample_games();
    let ics = generate_calendar(&games[..1], None, &[Alarm::OneDay, Alarm::OneHour], "2025/2026", now());

    assert_eq!(ics.matches("BEGIN:VALARM").count(), 2);
    assert!(ics.contains("TRIGGER:-P1D\r\n"));
    assert!(ics.contains("TRIGGER:-PT1H\r\n"));
    assert!(ics.contains("ACTION:DISPLAY\r\n"));
    assert!(ics.contains("DESCRIPTION:Vålerenga vs Storhamar i morgen\r\n"));
    assert!(ics.contains("DESCRIPTION:Vålerenga vs Storhamar om 1 time\r\n"));
    assert!(ics.contains("END:VALARM\r\nEND:VEVENT\r\n"), "ics was: {}", ics);

    let all = generate_calendar(&games, None, &[Alarm::FifteenMinutes], "2025/2026", now());
    assert_eq!(all.matches("BEGIN:VALARM").count(), 3);
}

#[test]
fn no_alarms_means_no_valarm() {
    let ics = generate_calendar(&sample_games(), None, &[], "2025/2026", now());
    assert!(!ics.contains("BEGIN:VALARM"));
}

#[test]
fn every_line_ends_with_crlf() {
    let ics = generate_calendar(&sample_games(), None, &Alarm::ALL, "2025/2026", now());

    assert!(ics.ends_with("\r\n"));
    for line in ics.split_inclusive('\n') {
        assert!(line.ends_with("\r\n"), "line without CRLF: {:?}", line);
    }
}

#[test]
fn calendar_name_variants() {
    assert_eq!(ical::calendar_name(None, "2025/2026"), "EHL 2025/2026");
    assert_eq!(ical::calendar_name(Some("Vålerenga"), "2025/2026"), "Vålerenga - EHL 2025/2026");
}

#[test]
fn output_parses_as_icalendar() {
    let ics = generate_calendar(&sample_games(), Some("Storhamar"), &[Alarm::ThreeHours], "2025/2026", now());
    let parsed = icalendar::parser::read_calendar(&ics).expect("valid icalendar");
    let calendar: icalendar::Calendar = parsed.into();

    let summaries: Vec<String> = calendar
        .components
        .iter()
        .filter_map(|c| match c {
            icalendar::CalendarComponent::Event(e) => e.property_value("SUMMARY").map(str::to_string),
            _ => None,
        })
        .collect();
    assert_eq!(summaries, vec!["Vålerenga vs Storhamar", "Storhamar vs Vålerenga"]);
}
