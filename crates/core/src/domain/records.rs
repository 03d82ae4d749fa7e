use crate::domain::Category;
use serde::{Deserialize, Serialize};

/// One daily self-rating record. The backend guarantees at most one notation
/// per (user, date); scores are expected in 0..=10 but are not re-validated
/// here. A missing score deserialises to `None` and renders as an absent
/// chart point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub name: String,

    /// YYYY/MM/DD.
    pub date: String,

    pub spiritual_note: Option<u8>,
    pub physical_note: Option<u8>,
    pub mental_note: Option<u8>,
    pub business_note: Option<u8>,
    pub social_note: Option<u8>,

    // Canonical spelling; "3_things_note" survives in rows written before the
    // field rename and is accepted on read.
    #[serde(alias = "3_things_note")]
    pub three_things_note: Option<u8>,

    pub russian_note: Option<u8>,
}

impl Notation {
    pub fn score(&self, category: Category) -> Option<u8> {
        match category {
            Category::Spiritual => self.spiritual_note,
            Category::Physical => self.physical_note,
            Category::Mental => self.mental_note,
            Category::Business => self.business_note,
            Category::Social => self.social_note,
            Category::ThreeThings => self.three_things_note,
            Category::Russian => self.russian_note,
        }
    }
}

/// One free-text journal submission. Unlike notations, several inputs may
/// share a date (resubmission is allowed upstream).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Name", default)]
    pub name: String,

    /// YYYY/MM/DD.
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Spiritual_meaning", default)]
    pub spiritual: String,
    #[serde(rename = "Physical_meaning", default)]
    pub physical: String,
    #[serde(rename = "Mental_meaning", default)]
    pub mental: String,
    #[serde(rename = "Business_meaning", default)]
    pub business: String,
    #[serde(rename = "Social_meaning", default)]
    pub social: String,

    #[serde(rename = "three_things", alias = "3_things", default)]
    pub three_things: String,

    #[serde(rename = "Russian_lesson", default)]
    pub russian: String,
}

impl RawInput {
    pub fn field(&self, category: Category) -> &str {
        match category {
            Category::Spiritual => &self.spiritual,
            Category::Physical => &self.physical,
            Category::Mental => &self.mental,
            Category::Business => &self.business,
            Category::Social => &self.social,
            Category::ThreeThings => &self.three_things,
            Category::Russian => &self.russian,
        }
    }
}

/// One generated advice document. `output` carries lightweight markup:
/// `###`-prefixed header lines and `**...**` emphasis, parsed by
/// [`crate::advice::parse_advice`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceOutput {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Name", default)]
    pub name: String,

    /// YYYY/MM/DD.
    #[serde(rename = "Date")]
    pub date: String,

    pub output: String,
}
