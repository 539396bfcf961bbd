use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{FitError, Recommender};
use crate::models::{RecommendationRequest, HealthResponse, ErrorResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

/// Configure all fitting routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/bra-fitting", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let entries = state.recommender.knowledge_base().len();
    let status = if entries > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        knowledge_base_entries: entries,
        timestamp: chrono::Utc::now(),
    })
}

/// Fit recommendation endpoint
///
/// POST /api/bra-fitting
///
/// Request body:
/// ```json
/// {
///   "text": "band rides up a lot, I'm 34 38"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        tracing::info!("Rejected recommendation request: {}", message);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse::new(message));
    }

    match state.recommender.get_recommendation(&req.text) {
        Ok(recommendation) => {
            tracing::info!(
                "Recommendation ({:?}) with confidence {:.3}, issues {:?}",
                recommendation.kind,
                recommendation.confidence,
                recommendation.identified_issues
            );
            HttpResponse::Ok().json(recommendation)
        }
        Err(e) => error_response(e),
    }
}

fn error_response(err: FitError) -> HttpResponse {
    match &err {
        FitError::Validation(message) => tracing::info!("Validation failed: {}", message),
        FitError::NoMatch => tracing::info!("No relevant or sister-size match found"),
        FitError::Internal(detail) => {
            let incident = uuid::Uuid::new_v4();
            tracing::error!(incident = %incident, "Unexpected recommendation failure: {}", detail);
        }
    }

    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse::new(err.public_message()))
}
