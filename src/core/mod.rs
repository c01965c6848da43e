// Core algorithm exports
pub mod cards;
pub mod code;
pub mod compatibility;
pub mod date;
pub mod reduction;

pub use cards::{Card, CardSet, CARD_NAMES};
pub use code::{compute_code, main_destiny};
pub use compatibility::{card_score, leader_text, CompatibilityEngine};
pub use date::{DateError, NormalizedDate};
pub use reduction::{digit_sum, digit_sum_no_zero, digital_root_9, reduce_to_22, wrap_diff};
