use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query for a single birth date code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TarotQuery {
    /// Birth date, e.g. `18.06.1984` or `1984-06-18`
    #[validate(length(min = 1, max = 32))]
    pub date: String,
}

/// Query for the compatibility of two partners
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompatQuery {
    #[validate(length(min = 1, max = 32))]
    pub date1: String,
    #[validate(length(min = 1, max = 32))]
    pub date2: String,
}
