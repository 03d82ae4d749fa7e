use chrono::{Duration, Local, NaiveDate};

/// Inclusive date range used for history and stats queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Trailing window `[today - days, today]`, both bounds inclusive.
pub fn trailing_window(today: NaiveDate, days: i64) -> DateWindow {
    DateWindow {
        start: today - Duration::days(days),
        end: today,
    }
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Wire format used by the backend for every date field and query parameter.
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Parses a backend date string. Slash-delimited is the canonical form;
/// dash-delimited input is tolerated as well.
pub fn parse_ymd(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y/%m/%d")
        .or_else(|_| NaiveDate::parse_from_str(t, "%Y-%m-%d"))
        .ok()
}

/// DD/MM/YYYY presentation form for list headers and advice metadata.
pub fn display_date(ymd: &str) -> String {
    let mut parts = ymd.trim().split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            format!("{d}/{m}/{y}")
        }
        _ => ymd.to_string(),
    }
}
