use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{compute_code, CompatibilityEngine, DateError, NormalizedDate};
use crate::models::{
    CardsResponse, CompatInput, CompatQuery, CompatResponse, ErrorResponse, HealthResponse,
    TarotQuery, TarotResponse,
};

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub compatibility: CompatibilityEngine,
}

/// Configure all tarot-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/tarot", web::get().to(get_tarot))
        .route("/compat", web::get().to(get_compat))
        .route("/cards", web::get().to(get_cards));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn invalid_date(err: DateError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid date".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Tarot code for one birth date
///
/// GET /api/tarot?date=18.06.1984
async fn get_tarot(query: web::Query<TarotQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::warn!("Validation failed for tarot request: {:?}", errors);
        return validation_failed(errors);
    }

    let date = match NormalizedDate::parse(&query.date) {
        Ok(date) => date,
        Err(e) => {
            tracing::warn!("Rejected tarot request: {}", e);
            return invalid_date(e);
        }
    };

    let code = compute_code(&date);

    tracing::info!(
        "Computed tarot code for {} (destiny: {}/{}/{})",
        date,
        code.destiny1,
        code.destiny2,
        code.destiny3
    );

    HttpResponse::Ok().json(TarotResponse {
        input: query.into_inner().date,
        result: (&code).into(),
    })
}

/// Compatibility of two partners
///
/// GET /api/compat?date1=18.06.1984&date2=1990-03-21
async fn get_compat(
    state: web::Data<AppState>,
    query: web::Query<CompatQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::warn!("Validation failed for compat request: {:?}", errors);
        return validation_failed(errors);
    }

    let result = match state.compatibility.compare_dates(&query.date1, &query.date2) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Rejected compat request: {}", e);
            return invalid_date(e);
        }
    };

    tracing::info!(
        "Compatibility {} + {}: union {}, total {}, score {} ({:?})",
        result.k1,
        result.k2,
        result.union,
        result.total,
        result.score,
        result.level
    );
    tracing::debug!("Compatibility summary: {}", result.summary);

    let CompatQuery { date1, date2 } = query.into_inner();
    HttpResponse::Ok().json(CompatResponse {
        input: CompatInput {
            partner1: date1,
            partner2: date2,
        },
        result: result.into(),
    })
}

/// Full card catalog
///
/// GET /api/cards
async fn get_cards() -> impl Responder {
    HttpResponse::Ok().json(CardsResponse::catalog())
}
