use chrono::{Days, Local, NaiveDate, NaiveDateTime};

/// One selectable day in the date picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    /// `YYYY-MM-DD`, the form the rest of the engine takes dates in.
    pub value: String,
    pub label: String,
}

/// Calendar day of an ISO timestamp or date string. Plain prefix parsing, no
/// timezone conversion: date matching is by local calendar day.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// True iff the kickoff timestamp falls on the target calendar day. Either
/// side failing to parse counts as no match.
pub fn is_match_on_date(kickoff: &str, target_date: &str) -> bool {
    match (parse_day(kickoff), parse_day(target_date)) {
        (Some(kickoff_day), Some(target_day)) => kickoff_day == target_day,
        _ => false,
    }
}

/// `HH:MM` display time for a kickoff timestamp.
pub fn match_time(kickoff: &str) -> String {
    let trimmed = kickoff.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|_| "--:--".to_string())
}

/// Display label for a kickoff day: Today, Tomorrow, or `dd/mm/yyyy`.
pub fn format_match_date(kickoff: &str) -> String {
    let Some(day) = parse_day(kickoff) else {
        return kickoff.trim().to_string();
    };
    let today = Local::now().date_naive();
    if day == today {
        "Today".to_string()
    } else if Some(day) == today.checked_add_days(Days::new(1)) {
        "Tomorrow".to_string()
    } else {
        day.format("%d/%m/%Y").to_string()
    }
}

/// The picker window: today plus the next two days.
pub fn available_dates() -> Vec<DateOption> {
    let today = Local::now().date_naive();
    (0..3u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .enumerate()
        .map(|(idx, day)| DateOption {
            value: day.format("%Y-%m-%d").to_string(),
            label: match idx {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => day.format("%d/%m/%Y").to_string(),
            },
        })
        .collect()
}

pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
