use crate::core::cards::{
    card_names, Card, ACTIVE, BAD_MARRIAGE, CONFLICT, GOOD_MARRIAGE, NEGATIVE, PASSIVE, POSITIVE,
    ROMANTIC,
};
use crate::core::code::main_destiny;
use crate::core::date::{DateError, NormalizedDate};
use crate::models::{CompatibilityLevel, CompatibilityResult, PersonalCode, ScoringWeights};

const PARTNER1_LEADS: &str = "Partner 1 takes the initiative more often.";
const PARTNER2_LEADS: &str = "Partner 2 takes the initiative more often.";
const SHARED_LEAD: &str =
    "The leading role can pass from one partner to the other, so it is important to negotiate roles.";

/// Score contribution of a single card
///
/// A card may belong to several classes; every matching adjustment applies.
#[inline]
pub fn card_score(card: Card) -> i32 {
    let mut score = 0;
    if POSITIVE.contains(card) {
        score += 2;
    }
    if NEGATIVE.contains(card) {
        score -= 2;
    }
    if GOOD_MARRIAGE.contains(card) {
        score += 1;
    }
    if BAD_MARRIAGE.contains(card) {
        score -= 1;
    }
    score
}

/// Which partner tends to lead, judged from the cards each one receives
pub fn leader_text(p1: Card, p2: Card) -> &'static str {
    if ACTIVE.contains(p1) && PASSIVE.contains(p2) {
        PARTNER1_LEADS
    } else if ACTIVE.contains(p2) && PASSIVE.contains(p1) {
        PARTNER2_LEADS
    } else {
        SHARED_LEAD
    }
}

/// Compatibility engine for two primary destiny cards
///
/// # Pipeline
/// 1. Union, received and total cards
/// 2. Weighted score and level
/// 3. Narrative: level, strengths, risks, leadership
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    weights: ScoringWeights,
}

impl CompatibilityEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Compare two partners by their primary destiny cards
    pub fn compare(&self, k1: Card, k2: Card) -> CompatibilityResult {
        let union = k1 + k2;
        let p1 = k1 + union;
        let p2 = k2 + union;
        let total = union + p1 + p2;

        let score = card_score(union) * self.weights.union
            + card_score(total) * self.weights.total
            + (card_score(p1) + card_score(p2)) * self.weights.received;
        let level = CompatibilityLevel::from_score(score);
        let leader_text = leader_text(p1, p2);

        let summary = build_summary(level, &[union, p1, p2, total], leader_text);

        CompatibilityResult {
            k1,
            k2,
            union,
            p1,
            p2,
            total,
            score,
            level,
            leader_text: leader_text.to_string(),
            summary,
        }
    }

    pub fn compare_codes(&self, first: &PersonalCode, second: &PersonalCode) -> CompatibilityResult {
        self.compare(first.destiny1, second.destiny1)
    }

    /// Parse both birth dates and compare them
    pub fn compare_dates(&self, first: &str, second: &str) -> Result<CompatibilityResult, DateError> {
        let k1 = main_destiny(&NormalizedDate::parse(first)?);
        let k2 = main_destiny(&NormalizedDate::parse(second)?);
        Ok(self.compare(k1, k2))
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn build_summary(level: CompatibilityLevel, cards: &[Card], leader_text: &str) -> String {
    let mut positives = Vec::new();
    let mut negatives = Vec::new();

    let stable = GOOD_MARRIAGE.pick(cards);
    if !stable.is_empty() {
        positives.push(format!("cards of a long and stable union: {}", card_names(&stable)));
    }
    let romantic = ROMANTIC.pick(cards);
    if !romantic.is_empty() {
        positives.push(format!(
            "the union is strongly about feelings and personal life: {}",
            card_names(&romantic)
        ));
    }
    let conflict = CONFLICT.pick(cards);
    if !conflict.is_empty() {
        negatives.push(format!("explosive, conflict-prone energy: {}", card_names(&conflict)));
    }

    let mut parts = vec![format!("{}.", level.description())];
    if !positives.is_empty() {
        parts.push(format!("Strengths: {}.", positives.join("; ")));
    }
    if !negatives.is_empty() {
        parts.push(format!("Risks: {}.", negatives.join("; ")));
    }
    parts.push(leader_text.to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(n: u8) -> Card {
        Card::new(n).unwrap()
    }

    #[test]
    fn test_card_score_classes() {
        // positive + good marriage
        assert_eq!(card_score(card(19)), 3);
        // negative + bad marriage
        assert_eq!(card_score(card(16)), -3);
        // good marriage only
        assert_eq!(card_score(card(8)), 1);
        // bad marriage only
        assert_eq!(card_score(card(20)), -1);
        // unclassified
        assert_eq!(card_score(card(1)), 0);
    }

    #[test]
    fn test_identical_destiny_cards() {
        let result = CompatibilityEngine::with_default_weights().compare(card(15), card(15));

        assert_eq!(result.union, card(8));
        assert_eq!(result.p1, card(1));
        assert_eq!(result.p2, card(1));
        assert_eq!(result.total, card(10));
        // 3 * 1 (JUSTICE) + 3 * 2 (FORTUNE) + 0 + 0
        assert_eq!(result.score, 9);
        assert_eq!(result.level, CompatibilityLevel::High);
        assert_eq!(result.leader_text, SHARED_LEAD);
        assert_eq!(
            result.summary,
            format!(
                "High, harmonious compatibility. Strengths: cards of a long and stable union: JUSTICE. {}",
                SHARED_LEAD
            )
        );
    }

    #[test]
    fn test_leader_precedence() {
        // MAGICIAN active, HIGH PRIESTESS passive
        assert_eq!(leader_text(card(1), card(2)), PARTNER1_LEADS);
        assert_eq!(leader_text(card(2), card(1)), PARTNER2_LEADS);
        assert_eq!(leader_text(card(1), card(4)), SHARED_LEAD);
        assert_eq!(leader_text(card(2), card(3)), SHARED_LEAD);
        // unclassified cards
        assert_eq!(leader_text(card(8), card(10)), SHARED_LEAD);
    }

    #[test]
    fn test_summary_clause_order() {
        let summary = build_summary(
            CompatibilityLevel::Severe,
            &[card(16), card(6), card(16), card(13)],
            SHARED_LEAD,
        );
        let level_at = summary.find("Very tense").unwrap();
        let strengths_at = summary.find("Strengths:").unwrap();
        let risks_at = summary.find("Risks:").unwrap();
        let lead_at = summary.find(SHARED_LEAD).unwrap();
        assert!(level_at < strengths_at && strengths_at < risks_at && risks_at < lead_at);
        assert!(summary.contains("explosive, conflict-prone energy: TOWER, DEATH."));
        assert!(summary.contains("cards of a long and stable union: LOVERS; "));
        assert!(summary.contains("personal life: LOVERS."));
    }

    #[test]
    fn test_summary_without_clauses() {
        let summary = build_summary(
            CompatibilityLevel::Medium,
            &[card(1), card(7), card(10), card(11)],
            PARTNER1_LEADS,
        );
        assert_eq!(
            summary,
            format!("{}. {}", CompatibilityLevel::Medium.description(), PARTNER1_LEADS)
        );
    }

    #[test]
    fn test_custom_weights() {
        let engine = CompatibilityEngine::new(ScoringWeights {
            union: 1,
            total: 1,
            received: 0,
        });
        let result = engine.compare(card(15), card(15));
        assert_eq!(result.score, 3);
        assert_eq!(result.level, CompatibilityLevel::Medium);
    }

    #[test]
    fn test_compare_dates_uses_main_destiny() {
        let engine = CompatibilityEngine::default();
        let result = engine.compare_dates("18.06.1984", "1984-06-18").unwrap();
        assert_eq!(result.k1, card(15));
        assert_eq!(result.k2, card(15));
    }

    #[test]
    fn test_compare_dates_propagates_error() {
        let engine = CompatibilityEngine::default();
        let err = engine.compare_dates("18.06.1984", "32.13.2020").unwrap_err();
        assert!(err.to_string().contains("32.13.2020"));
    }

    #[test]
    fn test_result_always_in_card_range() {
        let engine = CompatibilityEngine::default();
        for a in Card::all() {
            for b in Card::all() {
                let r = engine.compare(a, b);
                for c in [r.union, r.p1, r.p2, r.total] {
                    assert!((1..=22).contains(&c.value()));
                }
            }
        }
    }
}
