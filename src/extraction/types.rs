use serde::{Deserialize, Serialize};

/// Entity category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    #[serde(rename = "ORG")]
    Org,
    #[serde(rename = "GPE")]
    Gpe,
    #[serde(rename = "PERSON")]
    Person,
    #[serde(rename = "DATE")]
    Date,
    #[serde(rename = "PERCENT")]
    Percent,
    #[serde(rename = "MONEY")]
    Money,
    #[serde(rename = "QUANTITY")]
    Quantity,
    #[serde(rename = "CARDINAL")]
    Cardinal,
    /// Anything produced by the secondary domain extractor.
    #[serde(rename = "DISEASE/ENTITY")]
    Domain,
}

impl EntityLabel {
    /// Labels taken from the primary extractor for coverage and hallucination checks.
    pub const KEY_LABELS: [EntityLabel; 7] = [
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Person,
        EntityLabel::Date,
        EntityLabel::Percent,
        EntityLabel::Money,
        EntityLabel::Quantity,
    ];

    pub fn is_key(&self) -> bool {
        Self::KEY_LABELS.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Person => "PERSON",
            EntityLabel::Date => "DATE",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Domain => "DISEASE/ENTITY",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted span and its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Readability pair, rounded to two decimals by the evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    /// Flesch-Kincaid grade level.
    pub fkgl: f64,
    /// Flesch reading ease.
    pub fre: f64,
}
