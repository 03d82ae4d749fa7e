/// The seven fixed well-being categories. Every score, journal field and chart
/// series is keyed by one of these; the set and its display order never change
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Spiritual,
    Physical,
    Mental,
    Business,
    Social,
    ThreeThings,
    Russian,
}

impl Category {
    /// Canonical display and series order.
    pub const ALL: [Category; 7] = [
        Category::Spiritual,
        Category::Physical,
        Category::Mental,
        Category::Business,
        Category::Social,
        Category::ThreeThings,
        Category::Russian,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Spiritual => "Spiritual",
            Category::Physical => "Physical",
            Category::Mental => "Mental",
            Category::Business => "Business",
            Category::Social => "Social",
            Category::ThreeThings => "3 Things",
            Category::Russian => "Russian",
        }
    }

    /// Stable key used for chart series.
    pub fn series_key(self) -> &'static str {
        match self {
            Category::Spiritual => "spiritual",
            Category::Physical => "physical",
            Category::Mental => "mental",
            Category::Business => "business",
            Category::Social => "social",
            Category::ThreeThings => "three_things",
            Category::Russian => "russian",
        }
    }

    /// Key used by the backend stats endpoint for this category.
    pub fn stat_key(self) -> &'static str {
        match self {
            Category::Spiritual => "spiritual_note",
            Category::Physical => "physical_note",
            Category::Mental => "mental_note",
            Category::Business => "business_note",
            Category::Social => "social_note",
            Category::ThreeThings => "three_things_note",
            Category::Russian => "russian_note",
        }
    }

    pub fn from_stat_key(key: &str) -> Option<Category> {
        // "3_things_note" is the pre-migration spelling still present in old rows.
        match key {
            "spiritual_note" => Some(Category::Spiritual),
            "physical_note" => Some(Category::Physical),
            "mental_note" => Some(Category::Mental),
            "business_note" => Some(Category::Business),
            "social_note" => Some(Category::Social),
            "three_things_note" | "3_things_note" => Some(Category::ThreeThings),
            "russian_note" => Some(Category::Russian),
            _ => None,
        }
    }

    /// Fixed line colour per category; total and independent of the data.
    pub fn color(self) -> &'static str {
        match self {
            Category::Spiritual => "#8884d8",
            Category::Physical => "#82ca9d",
            Category::Mental => "#ffc658",
            Category::Business => "#ff8042",
            Category::Social => "#0088fe",
            Category::ThreeThings => "#00c49f",
            Category::Russian => "#ff0000",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_has_seven_distinct_categories() {
        let keys: HashSet<_> = Category::ALL.iter().map(|c| c.series_key()).collect();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn stat_key_round_trips() {
        for c in Category::ALL {
            assert_eq!(Category::from_stat_key(c.stat_key()), Some(c));
        }
        assert_eq!(
            Category::from_stat_key("3_things_note"),
            Some(Category::ThreeThings)
        );
        assert_eq!(Category::from_stat_key("unknown_note"), None);
    }

    #[test]
    fn colors_are_distinct() {
        let colors: HashSet<_> = Category::ALL.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), 7);
    }
}
