use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::cards::Card;
use crate::models::domain::{CompatibilityLevel, CompatibilityResult, PersonalCode};

/// Response for the single date endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TarotResponse {
    pub input: String,
    pub result: TarotResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct TarotResult {
    #[serde(rename = "dayCard")]
    pub day_card: Card,
    #[serde(rename = "monthCard")]
    pub month_card: Card,
    #[serde(rename = "yearCard")]
    pub year_card: Card,
    pub destiny1: Card,
    pub destiny2: Card,
    pub destiny3: Card,
    pub periods: [Card; 4],
    #[serde(rename = "periodAges")]
    pub period_ages: [u32; 4],
    #[serde(rename = "periodStartDates")]
    pub period_start_dates: [NaiveDate; 4],
    pub karmas: [Card; 4],
    pub gifts: [Card; 2],
    pub stones: [Card; 2],
}

impl From<&PersonalCode> for TarotResult {
    fn from(code: &PersonalCode) -> Self {
        Self {
            day_card: code.day_card,
            month_card: code.month_card,
            year_card: code.year_card,
            destiny1: code.destiny1,
            destiny2: code.destiny2,
            destiny3: code.destiny3,
            periods: code.period_cards,
            period_ages: code.period_ages,
            period_start_dates: code.period_start_dates,
            karmas: code.karma_cards,
            gifts: code.gift_cards,
            stones: code.stone_cards,
        }
    }
}

/// Response for the compatibility endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CompatResponse {
    pub input: CompatInput,
    pub result: CompatResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompatInput {
    pub partner1: String,
    pub partner2: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompatResult {
    pub k1: Card,
    pub k2: Card,
    pub union: Card,
    #[serde(rename = "unionName")]
    pub union_name: &'static str,
    pub p1: Card,
    #[serde(rename = "p1Name")]
    pub p1_name: &'static str,
    pub p2: Card,
    #[serde(rename = "p2Name")]
    pub p2_name: &'static str,
    pub total: Card,
    #[serde(rename = "totalName")]
    pub total_name: &'static str,
    pub score: i32,
    pub level: CompatibilityLevel,
    #[serde(rename = "levelText")]
    pub level_text: &'static str,
    #[serde(rename = "leaderText")]
    pub leader_text: String,
    pub summary: String,
}

impl From<CompatibilityResult> for CompatResult {
    fn from(result: CompatibilityResult) -> Self {
        Self {
            k1: result.k1,
            k2: result.k2,
            union: result.union,
            union_name: result.union.name(),
            p1: result.p1,
            p1_name: result.p1.name(),
            p2: result.p2,
            p2_name: result.p2.name(),
            total: result.total,
            total_name: result.total.name(),
            score: result.score,
            level: result.level,
            level_text: result.level.description(),
            leader_text: result.leader_text,
            summary: result.summary,
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct CardEntry {
    pub index: Card,
    pub name: &'static str,
}

/// Response listing the whole card catalog
#[derive(Debug, Clone, Serialize)]
pub struct CardsResponse {
    pub cards: Vec<CardEntry>,
}

impl CardsResponse {
    pub fn catalog() -> Self {
        Self {
            cards: Card::all()
                .map(|card| CardEntry {
                    index: card,
                    name: card.name(),
                })
                .collect(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
