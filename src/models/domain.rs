use chrono::NaiveDate;
use serde::Serialize;

use crate::core::cards::Card;
use crate::core::date::NormalizedDate;

/// Full tarot code derived from one birth date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalCode {
    pub birth_date: NormalizedDate,

    pub day_card: Card,
    pub month_card: Card,
    pub year_card: Card,

    pub destiny1: Card,
    pub destiny2: Card,
    pub destiny3: Card,

    pub period_cards: [Card; 4],
    /// Age in years at which each period begins; the first is always 0
    pub period_ages: [u32; 4],
    pub period_start_dates: [NaiveDate; 4],

    pub karma_cards: [Card; 4],
    pub gift_cards: [Card; 2],
    pub stone_cards: [Card; 2],
}

/// Qualitative compatibility band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    High,
    Medium,
    Challenging,
    Severe,
}

impl CompatibilityLevel {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 8 => Self::High,
            s if s >= 2 => Self::Medium,
            s if s >= -4 => Self::Challenging,
            _ => Self::Severe,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::High => "High, harmonious compatibility",
            Self::Medium => "Medium compatibility: the union works but needs attention",
            Self::Challenging => {
                "Challenging, karmic compatibility: it takes a high level of awareness"
            }
            Self::Severe => {
                "Very tense compatibility: without inner work the relationship can be hard"
            }
        }
    }
}

/// Compatibility of two partners derived from their primary destiny cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub k1: Card,
    pub k2: Card,
    pub union: Card,
    /// Card received by partner 1 from the union
    pub p1: Card,
    /// Card received by partner 2 from the union
    pub p2: Card,
    pub total: Card,
    pub score: i32,
    pub level: CompatibilityLevel,
    pub leader_text: String,
    pub summary: String,
}

/// Multipliers applied to per-card scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub union: i32,
    pub total: i32,
    pub received: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            union: 3,
            total: 3,
            received: 1,
        }
    }
}
