use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::SearchSettings;
use crate::core::{calculate_bounding_box, format_distance, is_recommended, SearchParameters, SpecialistFilter};
use crate::models::{
    AnalyzeSymptomsRequest, AnalyzeSymptomsResponse, ErrorResponse, HealthResponse, Point,
    SearchSpecialistsRequest, SearchSpecialistsResponse, SpecialistResult,
};
use crate::services::{SupabaseClient, SymptomAnalyzer};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub supabase: Arc<SupabaseClient>,
    pub analyzer: Arc<SymptomAnalyzer>,
    pub search: SearchSettings,
}

/// Configure specialist search and symptom analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/specialists/search", web::post().to(search_specialists))
        .route("/symptoms/analyze", web::post().to(analyze_symptoms));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Specialist search endpoint
///
/// POST /api/v1/specialists/search
///
/// Request body:
/// ```json
/// {
///   "latitude": -1.2921,
///   "longitude": 36.8219,
///   "radiusKm": 25,
///   "sortBy": "distance|experience|name",
///   "specialty": "Cardiology",
///   "searchTerm": "string",
///   "minExperience": 5,
///   "recommendedSpecialty": "Cardiology",
///   "limit": 20
/// }
/// ```
async fn search_specialists(
    state: web::Data<AppState>,
    req: web::Json<SearchSpecialistsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let params = search_parameters(&req, &state.search);
    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.search.default_limit);

    tracing::info!(
        "Searching specialists near ({}, {}) within {}km, sort {:?}",
        params.origin.latitude,
        params.origin.longitude,
        params.radius_km,
        params.sort_key
    );

    // The bounding box only narrows the backend query; the exact radius check happens in search
    let bbox = calculate_bounding_box(params.origin, params.radius_km);

    let fetched = match state
        .supabase
        .fetch_specialists(Some(&bbox), state.search.candidate_limit)
        .await
    {
        Ok(fetched) => fetched,
        Err(e) => {
            tracing::error!("Failed to fetch specialists: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch specialists".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let candidates_truncated = fetched.truncated;
    let specialists = fetched.specialists;
    let total_candidates = specialists.len();

    let filter = SpecialistFilter {
        specialty: req.specialty.clone(),
        search_term: req.search_term.clone(),
        min_experience: req.min_experience,
    };
    let filtered = filter.apply(specialists);

    let mut ranked = params.apply(&filtered);
    ranked.truncate(limit);

    let recommended_specialty = req.recommended_specialty.as_deref().unwrap_or_default();
    let results: Vec<SpecialistResult> = ranked
        .into_iter()
        .map(|r| SpecialistResult {
            distance_label: format_distance(r.distance_km),
            recommended: is_recommended(&r.candidate, recommended_specialty),
            ranked: r,
        })
        .collect();

    tracing::info!(
        "Returning {} specialists (from {} candidates, {} after filters)",
        results.len(),
        total_candidates,
        filtered.len()
    );

    HttpResponse::Ok().json(SearchSpecialistsResponse {
        specialists: results,
        total_candidates,
        candidates_truncated,
        radius_km: params.radius_km,
        sort_by: params.sort_key,
    })
}

/// Resolve request values against configured defaults and caps
pub fn search_parameters(req: &SearchSpecialistsRequest, settings: &SearchSettings) -> SearchParameters {
    let radius_km = req
        .radius_km
        .unwrap_or(settings.default_radius_km)
        .min(settings.max_radius_km);

    SearchParameters::new(Point::new(req.latitude, req.longitude), radius_km, req.sort_by)
}

/// Symptom analysis endpoint
///
/// POST /api/v1/symptoms/analyze
///
/// Request body:
/// ```json
/// {
///   "symptoms": "string",
///   "userType": "patient"
/// }
/// ```
async fn analyze_symptoms(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeSymptomsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let outcome = state.analyzer.analyze(&req.symptoms, &req.user_type).await;

    HttpResponse::Ok().json(AnalyzeSymptomsResponse {
        analysis: outcome.analysis,
        strategy: outcome.strategy.to_string(),
        attempts: outcome.failed_attempts,
    })
}
