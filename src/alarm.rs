use chrono::TimeDelta;

/// Reminder offsets offered for every calendar file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alarm {
    OneDay,
    ThreeHours,
    OneHour,
    FifteenMinutes,
}

impl Alarm {
    /// Canonical order; combinations and filename suffixes follow it.
    pub const ALL: [Alarm; 4] = [Alarm::OneDay, Alarm::ThreeHours, Alarm::OneHour, Alarm::FifteenMinutes];

    /// RFC 5545 TRIGGER value relative to DTSTART.
    pub fn trigger(self) -> &'static str {
        match self {
            Alarm::OneDay => "-P1D",
            Alarm::ThreeHours => "-PT3H",
            Alarm::OneHour => "-PT1H",
            Alarm::FifteenMinutes => "-PT15M",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Alarm::OneDay => "1d",
            Alarm::ThreeHours => "3h",
            Alarm::OneHour => "1h",
            Alarm::FifteenMinutes => "15m",
        }
    }

    pub fn duration(self) -> TimeDelta {
        match self {
            Alarm::OneDay => TimeDelta::days(1),
            Alarm::ThreeHours => TimeDelta::hours(3),
            Alarm::OneHour => TimeDelta::hours(1),
            Alarm::FifteenMinutes => TimeDelta::minutes(15),
        }
    }

    /// Norwegian reminder text for a match summary.
    pub fn description(self, summary: &str) -> String {
        match self {
            Alarm::OneDay => format!("{summary} i morgen"),
            Alarm::ThreeHours => format!("{summary} om 3 timer"),
            Alarm::OneHour => format!("{summary} om 1 time"),
            Alarm::FifteenMinutes => format!("{summary} om 15 minutter"),
        }
    }
}

/// Filename suffix for a set of alarms, e.g. `[OneDay, OneHour]` -> "1d-1h".
pub fn alarm_set_suffix(alarms: &[Alarm]) -> String {
    alarms.iter().map(|a| a.suffix()).collect::<Vec<_>>().join("-")
}

/// All 16 subsets of [`Alarm::ALL`]. Bit `j` of the index selects `ALL[j]`,
/// so index 0 is empty and index 15 holds every alarm.
pub fn alarm_combinations() -> Vec<Vec<Alarm>> {
    let count = 1usize << Alarm::ALL.len();
    (0..count)
        .map(|mask| {
            Alarm::ALL
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1usize << *bit) != 0)
                .map(|(_, alarm)| *alarm)
                .collect()
        })
        .collect()
}

/// VALARM component without the trailing line break.
pub fn format_valarm(alarm: Alarm, summary: &str) -> String {
    format!(
        "BEGIN:VALARM\r\nTRIGGER:{}\r\nACTION:DISPLAY\r\nDESCRIPTION:{}\r\nEND:VALARM",
        alarm.trigger(),
        alarm.description(summary)
    )
}
