use actix_web::{web, HttpResponse, Responder};
use rand::seq::SliceRandom;
use std::sync::Arc;
use validator::Validate;

use crate::core::catalog::{
    AFFILIATIONS, BEST_PICKS, COLLEGE_LOCATIONS, COLLEGE_SIZES, COLLEGE_TYPES, IMAGE_SETS,
    LEAST_PICKS, MODES_OF_CONNECTION, MODE_PICKS, TRAITS_ROUND_1, TRAITS_ROUND_2,
};
use crate::core::{state_names, Matcher, Scorer};
use crate::models::{
    CompleteQuizRequest, CompleteQuizResponse, ErrorResponse, HealthResponse,
    MatchCollegesRequest, MatchCollegesResponse, QuestionsResponse, ScoreRequest,
    SelectionLimits, Submission, SubmitRequest, SubmitResponse,
};
use crate::services::{CollegeDataset, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: Scorer,
    pub matcher: Matcher,
    pub dataset: Arc<CollegeDataset>,
    /// `None` when the service runs without persistence
    pub postgres: Option<Arc<PostgresClient>>,
}

/// Configure all quiz-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/quiz/questions", web::get().to(get_questions))
        .route("/quiz/score", web::post().to(score_quiz))
        .route("/quiz/submit", web::post().to(submit_quiz))
        .route("/quiz/complete", web::post().to(complete_quiz))
        .route("/quiz/stats", web::get().to(get_stats))
        .route("/colleges/match", web::post().to(match_colleges));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn persistence_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse {
        error: "Persistence unavailable".to_string(),
        message: "No database is configured for this service".to_string(),
        status_code: 503,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = match &state.postgres {
        Some(postgres) => postgres.health_check().await.unwrap_or(false),
        None => false,
    };

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        colleges: state.dataset.len(),
    })
}

/// Question option lists
///
/// GET /api/v1/quiz/questions
///
/// Token lists are shuffled per request, the filter options keep their order.
async fn get_questions() -> impl Responder {
    let mut rng = rand::thread_rng();
    let mut shuffled = |options: &[&str]| {
        let mut options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        options.shuffle(&mut rng);
        options
    };

    let traits_round1 = shuffled(&TRAITS_ROUND_1[..]);
    let traits_round2 = shuffled(&TRAITS_ROUND_2[..]);
    let images = shuffled(&IMAGE_SETS[..]);
    let modes = shuffled(&MODES_OF_CONNECTION[..]);

    let ordered = |options: &[&str]| options.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    HttpResponse::Ok().json(QuestionsResponse {
        traits_round1,
        traits_round2,
        images,
        modes,
        locations: ordered(&COLLEGE_LOCATIONS[..]),
        college_types: ordered(&COLLEGE_TYPES[..]),
        college_sizes: ordered(&COLLEGE_SIZES[..]),
        affiliations: ordered(&AFFILIATIONS[..]),
        states: ordered(&state_names()[..]),
        limits: SelectionLimits {
            best: BEST_PICKS,
            least: LEAST_PICKS,
            modes: MODE_PICKS,
        },
    })
}

/// Score a completed answer set
///
/// POST /api/v1/quiz/score
///
/// Request body:
/// ```json
/// {
///   "answers": {
///     "traitsRound1": { "best": ["..."], "most": "...", "least": ["..."] },
///     "traitsRound2": { "best": ["..."], "most": "...", "least": ["..."] },
///     "images": { "best": ["..."], "most": "...", "least": ["..."] },
///     "modes": ["...", "..."]
///   }
/// }
/// ```
async fn score_quiz(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    match state.scorer.score(&req.answers) {
        Ok(result) => {
            tracing::info!(
                "Scored quiz: persona={}, motivator={}",
                result.persona.name,
                result.winning_category
            );
            HttpResponse::Ok().json(result)
        }
        Err(e) => {
            tracing::warn!("Rejected answer set: {}", e);
            bad_request("Invalid answers", e.to_string())
        }
    }
}

/// Match colleges by location, type and size
///
/// POST /api/v1/colleges/match
///
/// Request body:
/// ```json
/// {
///   "location": "In-state",
///   "collegeType": "Public",
///   "collegeSize": "7,501+",
///   "state": "Iowa"
/// }
/// ```
async fn match_colleges(
    state: web::Data<AppState>,
    req: web::Json<MatchCollegesRequest>,
) -> impl Responder {
    let result = state
        .matcher
        .find_matches(&req.filters, state.dataset.colleges());

    HttpResponse::Ok().json(MatchCollegesResponse {
        colleges: result.colleges,
        pool_size: result.pool_size,
    })
}

/// Store a flat submission record
///
/// POST /api/v1/quiz/submit
async fn submit_quiz(state: web::Data<AppState>, req: web::Json<SubmitRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for submission: {}", errors);
        return bad_request(
            "Missing required submission fields: personaName and state are required.",
            errors.to_string(),
        );
    }

    let Some(postgres) = &state.postgres else {
        return persistence_unavailable();
    };

    let req = req.into_inner();
    let submission = Submission {
        reference: uuid::Uuid::new_v4(),
        persona_name: req.persona_name,
        state: req.state,
        full_name: req.full_name,
        email: req.email,
        affiliation: req.affiliation,
        winning_category: None,
        top_two_colors: req.top_two_colors,
    };

    match postgres.insert_submission(&submission).await {
        Ok(receipt) => HttpResponse::Ok().json(SubmitResponse {
            message: "Submission Saved".to_string(),
            reference: submission.reference,
            submitted_at: receipt.submitted_at,
        }),
        Err(e) => {
            tracing::error!("Failed to save submission: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save submission.".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Score, match and persist a completed quiz in one call
///
/// POST /api/v1/quiz/complete
///
/// Persistence runs in the background; its failures are logged and never
/// reach the response.
async fn complete_quiz(
    state: web::Data<AppState>,
    req: web::Json<CompleteQuizRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for completed quiz: {}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let result = match state.scorer.score(&req.answers) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Rejected answer set: {}", e);
            return bad_request("Invalid answers", e.to_string());
        }
    };

    let matches = state
        .matcher
        .find_matches(&req.filters, state.dataset.colleges());

    let req = req.into_inner();
    let submission = Submission {
        reference: uuid::Uuid::new_v4(),
        persona_name: result.persona.name.clone(),
        state: req.filters.state.clone(),
        full_name: req.full_name,
        email: req.email,
        affiliation: req.affiliation,
        winning_category: Some(result.winning_category.label().to_string()),
        top_two_colors: result.top_two_colors.iter().map(|c| c.to_string()).collect(),
    };
    let reference = submission.reference;

    match &state.postgres {
        Some(postgres) => {
            let postgres = Arc::clone(postgres);
            actix_web::rt::spawn(async move {
                if let Err(e) = postgres.insert_submission(&submission).await {
                    tracing::error!("Failed to persist submission {}: {}", submission.reference, e);
                }
            });
        }
        None => {
            tracing::debug!("Persistence disabled, dropping submission {}", reference);
        }
    }

    tracing::info!(
        "Completed quiz {}: persona={}, {} colleges",
        reference,
        result.persona.name,
        matches.colleges.len()
    );

    HttpResponse::Ok().json(CompleteQuizResponse {
        reference,
        result,
        colleges: matches.colleges,
    })
}

/// Submission counts per persona
///
/// GET /api/v1/quiz/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let Some(postgres) = &state.postgres else {
        return persistence_unavailable();
    };

    match postgres.count_by_persona().await {
        Ok(counts) => {
            let total: i64 = counts.iter().map(|c| c.submissions).sum();
            HttpResponse::Ok().json(serde_json::json!({
                "total": total,
                "personas": counts,
            }))
        }
        Err(e) => {
            tracing::error!("Failed to fetch submission stats: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch submission stats".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
