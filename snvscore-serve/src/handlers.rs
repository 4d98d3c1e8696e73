//! Endpoint handlers

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use log::{error, info};

use snvscore_core::models::{ScoreResult, VariantRequest};
use snvscore_fetch::fetch_window;
use snvscore_scoring::score_in_window;

use crate::server::AppState;
use crate::types::{AnalyzeParams, ErrorResponse, HealthResponse, ServiceError};

type Rejection = (StatusCode, Json<ErrorResponse>);

///
/// Validate, fetch, then score with exclusive access to the model. Runs on
/// the blocking pool: both collaborators are synchronous.
///
async fn analyze(state: AppState, params: AnalyzeParams) -> Result<Json<ScoreResult>, Rejection> {
    let request = VariantRequest::try_from(params).map_err(|e| ServiceError::from(e).into_rejection())?;
    info!("Analyzing variant {}", request);

    let result = tokio::task::spawn_blocking(move || -> Result<ScoreResult, ServiceError> {
        let window = fetch_window(
            state.provider.as_ref(),
            request.position,
            &request.genome,
            &request.chromosome,
            state.window_size,
        )?;

        let mut model = state.scorer.lock()?;
        Ok(score_in_window(&request, &window, &mut *model, &state.params)?)
    })
    .await
    .map_err(|e| ServiceError::Internal(format!("scoring task failed: {}", e)).into_rejection())?;

    match result {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!("Variant analysis failed: {}", e);
            Err(e.into_rejection())
        }
    }
}

/// Score a variant given as query parameters
pub async fn analyze_single_variant(
    State(state): State<AppState>,
    params: Result<Query<AnalyzeParams>, QueryRejection>,
) -> Result<Json<ScoreResult>, Rejection> {
    let Query(params) = params.map_err(|e| ServiceError::Malformed(e.body_text()).into_rejection())?;
    analyze(state, params).await
}

/// Score a variant given as a JSON body
pub async fn score_variant_json(
    State(state): State<AppState>,
    params: Result<Json<AnalyzeParams>, JsonRejection>,
) -> Result<Json<ScoreResult>, Rejection> {
    let Json(params) = params.map_err(|e| ServiceError::Malformed(e.body_text()).into_rejection())?;
    analyze(state, params).await
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        genome_source: state.genome_source.clone(),
        window_size: state.window_size,
    })
}

pub async fn handle_404() -> Rejection {
    let response = ErrorResponse {
        error: "not_found".to_string(),
        message: "Endpoint not found".to_string(),
    };
    (StatusCode::NOT_FOUND, Json(response))
}
