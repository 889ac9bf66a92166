//! Axum route handlers for the Screening API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::applicant::{EducationRecord, WorkExperienceRecord};
use crate::models::job::JobRequirements;
use crate::notifications::screening_notices;
use crate::screening::engine::ScreeningResult;
use crate::screening::review::{apply_hr_override, ApplicationStatus, ScoreSummary};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Both record lists are required; an applicant with no history sends `[]`.
#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    #[serde(default)]
    pub application_id: Option<Uuid>,
    #[serde(default)]
    pub applicant_id: Option<Uuid>,
    #[serde(default)]
    pub job_id: Option<Uuid>,
    pub education: Vec<EducationRecord>,
    pub experience: Vec<WorkExperienceRecord>,
    pub job: JobRequirements,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub result: ScreeningResult,
    pub summary: ScoreSummary,
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct BatchScreenRequest {
    /// Decoded one by one so a malformed item only fails itself.
    pub applications: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct BatchItemResult {
    pub application_id: Option<Uuid>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScreenResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchScreenResponse {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<BatchItemResult>,
}

#[derive(Debug, Deserialize)]
pub struct OverrideRequest {
    #[serde(default)]
    pub application_id: Option<Uuid>,
    pub result: ScreeningResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screening
///
/// Screens one application. When the application and applicant ids are
/// supplied, outcome notices are dispatched in the background.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    let response = screen_one(&state, &request)?;
    Ok(Json(response))
}

/// POST /api/v1/screening/batch
///
/// Screens several applications. Each item succeeds or fails on its own.
pub async fn handle_screen_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchScreenRequest>,
) -> Result<Json<BatchScreenResponse>, AppError> {
    let limit = state.config.screening_batch_limit;
    if request.applications.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} applications per batch, got {}",
            request.applications.len()
        )));
    }

    let results: Vec<BatchItemResult> = request
        .applications
        .into_iter()
        .map(|raw| screen_batch_item(&state, raw))
        .collect();

    let succeeded = results.iter().filter(|r| r.success).count();
    let failed = results.len() - succeeded;
    info!(total = results.len(), succeeded, failed, "batch screening finished");

    Ok(Json(BatchScreenResponse {
        total: results.len(),
        succeeded,
        failed,
        results,
    }))
}

/// POST /api/v1/screening/override
///
/// HR forces a pass on an existing result.
pub async fn handle_override(
    Json(request): Json<OverrideRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    let result = apply_hr_override(&request.result);
    info!(
        application_id = ?request.application_id,
        original_score = request.result.score,
        "screening overridden by HR"
    );

    Ok(Json(ScreenResponse {
        summary: ScoreSummary::from(&result),
        result,
        status: ApplicationStatus::HrApproved,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn screen_one(state: &AppState, request: &ScreenRequest) -> Result<ScreenResponse, AppError> {
    validate_requirements(&request.job)?;

    let result = state
        .screening
        .screen(&request.education, &request.experience, &request.job);

    info!(
        application_id = ?request.application_id,
        score = result.score,
        passed = result.passed,
        highest_education = result.highest_education_label(),
        "application screened"
    );

    if let (Some(application_id), Some(applicant_id)) = (request.application_id, request.applicant_id) {
        state.notifier.dispatch(screening_notices(
            application_id,
            applicant_id,
            request.job_id,
            &result,
        ));
    }

    Ok(ScreenResponse {
        summary: ScoreSummary::from(&result),
        status: ApplicationStatus::from_result(&result),
        result,
    })
}

fn screen_batch_item(state: &AppState, raw: Value) -> BatchItemResult {
    let application_id = raw
        .get("application_id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok());

    let outcome = serde_json::from_value::<ScreenRequest>(raw)
        .map_err(|e| format!("invalid application: {e}"))
        .and_then(|request| screen_one(state, &request).map_err(|e| e.to_string()));

    match outcome {
        Ok(response) => BatchItemResult {
            application_id,
            success: true,
            result: Some(response),
            error: None,
        },
        Err(error) => {
            warn!(?application_id, %error, "batch item failed");
            BatchItemResult {
                application_id,
                success: false,
                result: None,
                error: Some(error),
            }
        }
    }
}

pub fn validate_requirements(job: &JobRequirements) -> Result<(), AppError> {
    if !job.min_experience_years.is_finite() || job.min_experience_years < 0.0 {
        return Err(AppError::Validation(
            "min_experience_years must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
