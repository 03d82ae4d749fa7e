use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of recent score movement, computed server-side. Values outside
/// the four known ones are kept verbatim so the UI can show them as-is
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
    InsufficientData,
    #[serde(untagged)]
    Other(String),
}

impl Trend {
    pub fn glyph(&self) -> &str {
        match self {
            Trend::Up => "↗",
            Trend::Down => "↘",
            Trend::Stable => "→",
            Trend::InsufficientData => "?",
            Trend::Other(raw) => raw,
        }
    }
}

/// Server-computed aggregate for one category over the queried window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSummary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Envelope returned by `GET /notations/stats/{user}`. `stats` is keyed by
/// the backend stat key per category and is empty when the user has no
/// notations in the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotationStats {
    #[serde(default)]
    pub total_entries: u64,

    #[serde(default)]
    pub date_range: Option<DateRange>,

    #[serde(default)]
    pub stats: BTreeMap<String, StatSummary>,
}
