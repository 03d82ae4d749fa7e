use crate::domain::{Category, Notation};
use serde::Serialize;

/// Fixed axis maximum for the snapshot radar.
pub const FULL_MARK: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub category: &'static str,
    pub value: Option<u8>,
    pub full_mark: u8,
}

/// Maps one notation onto the seven radar axes in canonical category order.
/// A missing score yields a point with no value; the charting layer decides
/// whether that renders as absent or zero.
pub fn radar_points(notation: &Notation) -> Vec<RadarPoint> {
    Category::ALL
        .iter()
        .map(|&category| RadarPoint {
            category: category.label(),
            value: notation.score(category),
            full_mark: FULL_MARK,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notation() -> Notation {
        serde_json::from_value(json!({
            "name": "alice",
            "date": "2024/05/12",
            "spiritual_note": 7,
            "physical_note": 5,
            "mental_note": 6,
            "business_note": 8,
            "social_note": 4,
            "three_things_note": 9,
            "russian_note": 3
        }))
        .unwrap()
    }

    #[test]
    fn produces_seven_points_in_fixed_order() {
        let points = radar_points(&notation());
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].category, "Spiritual");
        assert_eq!(points[0].value, Some(7));
        assert_eq!(points[5].category, "3 Things");
        assert_eq!(points[5].value, Some(9));
        assert!(points.iter().all(|p| p.full_mark == FULL_MARK));
    }

    #[test]
    fn missing_score_yields_valueless_point() {
        let mut n = notation();
        n.mental_note = None;
        let points = radar_points(&n);
        assert_eq!(points[2].category, "Mental");
        assert_eq!(points[2].value, None);
    }
}
