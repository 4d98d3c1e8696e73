//! Request and response types for the variant scoring service

use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use snvscore_core::errors::{ScoringError, ValidationError, VariantError};
use snvscore_core::models::VariantRequest;

/// Inbound variant, before validation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzeParams {
    pub variant_position: u64,
    pub alternative: String,
    pub genome: String,
    pub chromosome: String,
}

impl TryFrom<AnalyzeParams> for VariantRequest {
    type Error = ValidationError;

    fn try_from(params: AnalyzeParams) -> Result<Self, Self::Error> {
        VariantRequest::new(
            params.variant_position,
            &params.alternative,
            &params.genome,
            &params.chromosome,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub genome_source: String,
    pub window_size: usize,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The request could not be decoded at all
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl From<VariantError> for ServiceError {
    fn from(err: VariantError) -> Self {
        match err {
            VariantError::Validation(e) => ServiceError::Validation(e),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

impl From<ScoringError> for ServiceError {
    fn from(err: ScoringError) -> Self {
        ServiceError::Upstream(err.to_string())
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: match self {
                ServiceError::Validation(_) | ServiceError::Malformed(_) => "validation_error".to_string(),
                ServiceError::Upstream(_) => "upstream_error".to_string(),
                ServiceError::Internal(_) => "internal_error".to_string(),
            },
            message: self.to_string(),
        }
    }

    pub fn into_rejection(self) -> (StatusCode, Json<ErrorResponse>) {
        (self.status_code(), Json(self.to_response()))
    }
}
