use crate::domain::{Category, Notation};
use crate::time::parse_ymd;
use serde::Serialize;

/// One time-series sample: a short display date plus the seven per-category
/// values in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesRow {
    /// DD/MM, for axis labels.
    pub date: String,
    /// Original YYYY/MM/DD key.
    pub full_date: String,
    pub values: [Option<u8>; 7],
}

impl SeriesRow {
    pub fn value(&self, category: Category) -> Option<u8> {
        let idx = Category::ALL
            .iter()
            .position(|&c| c == category)
            .unwrap_or(0);
        self.values[idx]
    }
}

/// Static line definition for one category series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesLine {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub fn series_lines() -> [SeriesLine; 7] {
    Category::ALL.map(|c| SeriesLine {
        key: c.series_key(),
        label: c.label(),
        color: c.color(),
    })
}

/// Projects a notation history into chart rows, sorted ascending by calendar
/// date. The backend claims most-recent-first but the order is re-derived
/// here rather than trusted. The sort is stable; rows whose date fails to
/// parse sort before all dated rows, keeping their relative input order.
pub fn series_rows(notations: &[Notation]) -> Vec<SeriesRow> {
    let mut sorted: Vec<&Notation> = notations.iter().collect();
    sorted.sort_by_key(|n| parse_ymd(&n.date));

    sorted
        .into_iter()
        .map(|n| SeriesRow {
            date: short_date(&n.date),
            full_date: n.date.clone(),
            values: Category::ALL.map(|c| n.score(c)),
        })
        .collect()
}

/// YYYY/MM/DD -> DD/MM; anything else passes through unchanged.
fn short_date(ymd: &str) -> String {
    let mut parts = ymd.trim().split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(m), Some(d)) if !m.is_empty() && !d.is_empty() => format!("{d}/{m}"),
        _ => ymd.to_string(),
    }
}
