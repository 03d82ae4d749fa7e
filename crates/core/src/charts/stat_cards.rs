use crate::domain::{Category, NotationStats};
use serde::Serialize;

/// Display form of one category aggregate: average to one decimal, whole-
/// number min/max, trend as a glyph (or the raw backend value when the trend
/// is unrecognised).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub average: String,
    pub min: f64,
    pub max: f64,
    pub trend: String,
}

/// Builds one card per entry in the stats map. Known categories come first in
/// canonical order; unknown stat keys follow in map order, labelled by their
/// raw key instead of being dropped.
pub fn stat_cards(stats: &NotationStats) -> Vec<StatCard> {
    let mut cards = Vec::with_capacity(stats.stats.len());

    for category in Category::ALL {
        if let Some(summary) = stats.stats.get(category.stat_key()) {
            cards.push(card(category.label().to_string(), summary));
        }
    }

    for (key, summary) in &stats.stats {
        if Category::from_stat_key(key).is_none() {
            cards.push(card(key.clone(), summary));
        }
    }

    cards
}

fn card(label: String, summary: &crate::domain::StatSummary) -> StatCard {
    StatCard {
        label,
        average: format!("{:.1}", summary.average),
        min: summary.min,
        max: summary.max,
        trend: summary.trend.glyph().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stats(v: serde_json::Value) -> NotationStats {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let s = stats(json!({
            "stats": {
                "physical_note": { "average": 6.6667, "min": 4, "max": 9, "trend": "stable" }
            }
        }));

        let cards = stat_cards(&s);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].label, "Physical");
        assert_eq!(cards[0].average, "6.7");
        assert_eq!(cards[0].min, 4.0);
        assert_eq!(cards[0].trend, "→");
    }

    #[test]
    fn unknown_trend_is_shown_verbatim() {
        let s = stats(json!({
            "stats": {
                "mental_note": { "average": 5.0, "min": 5, "max": 5, "trend": "wobbly" }
            }
        }));

        assert_eq!(stat_cards(&s)[0].trend, "wobbly");
    }

    #[test]
    fn unknown_category_key_falls_back_to_raw_label_after_known_ones() {
        let s = stats(json!({
            "stats": {
                "aura_note": { "average": 1.0, "min": 1, "max": 1, "trend": "up" },
                "spiritual_note": { "average": 7.0, "min": 6, "max": 8, "trend": "up" }
            }
        }));

        let cards = stat_cards(&s);
        assert_eq!(cards[0].label, "Spiritual");
        assert_eq!(cards[1].label, "aura_note");
        assert_eq!(cards[1].trend, "↗");
    }

    #[test]
    fn empty_stats_produce_no_cards() {
        let s = stats(json!({ "stats": {} }));
        assert!(stat_cards(&s).is_empty());
    }
}
