//! Tarot Code - numerology code and partner compatibility service
//!
//! This library computes the tarot "code" of a birth date (base, destiny,
//! period, karma, gift and stone cards) and scores the compatibility of two
//! partners from their primary destiny cards.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{compute_code, Card, CompatibilityEngine, DateError, NormalizedDate};
pub use models::{CompatibilityLevel, CompatibilityResult, PersonalCode, ScoringWeights};
