// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CompatibilityLevel, CompatibilityResult, PersonalCode, ScoringWeights};
pub use requests::{CompatQuery, TarotQuery};
pub use responses::{
    CardEntry, CardsResponse, CompatInput, CompatResponse, CompatResult, ErrorResponse,
    HealthResponse, TarotResponse, TarotResult,
};
