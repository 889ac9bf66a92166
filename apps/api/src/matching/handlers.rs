//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::matcher::{MatchBreakdown, MatchResult};
use crate::matching::ranking::{
    rank_applicants, rank_jobs, Candidate, JobListing, RankedApplicant, RankedJob,
    DEFAULT_MIN_SCORE,
};
use crate::models::applicant::ApplicantPreferences;
use crate::models::job::JobPosting;
use crate::notifications::job_match_notices;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    pub job: JobPosting,
    pub preferences: ApplicantPreferences,
}

#[derive(Debug, Serialize)]
pub struct MatchScoreResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub breakdown: MatchBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchesRequest {
    #[serde(default)]
    pub applicant_id: Option<Uuid>,
    pub preferences: ApplicantPreferences,
    pub jobs: Vec<JobListing>,
    #[serde(default)]
    pub min_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchesResponse {
    pub matches: Vec<RankedJob>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicantMatchesRequest {
    pub job: JobPosting,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub min_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ApplicantMatchesResponse {
    pub matches: Vec<RankedApplicant>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matching/score
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    validate_salaries(request.job.salary, request.preferences.min_salary)?;

    let breakdown = state.matcher.breakdown(&request.job, &request.preferences);
    Ok(Json(MatchScoreResponse {
        result: MatchResult::from_score(breakdown.score),
        breakdown,
    }))
}

/// POST /api/v1/matching/jobs
///
/// Ranks job listings for one applicant. With an `applicant_id`, listings at
/// or above the configured threshold produce job-match notices.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Json(request): Json<JobMatchesRequest>,
) -> Result<Json<JobMatchesResponse>, AppError> {
    let min_score = resolve_min_score(request.min_score)?;
    validate_salaries(None, request.preferences.min_salary)?;
    for listing in &request.jobs {
        validate_salaries(listing.posting.salary, None)?;
    }

    let matches = rank_jobs(&state.matcher, &request.preferences, &request.jobs, min_score);
    info!(
        applicant_id = ?request.applicant_id,
        listings = request.jobs.len(),
        matches = matches.len(),
        "job matches ranked"
    );

    if let Some(applicant_id) = request.applicant_id {
        let notices = job_match_notices(
            applicant_id,
            &matches,
            state.config.job_match_notify_threshold,
        );
        if !notices.is_empty() {
            state.notifier.dispatch(notices);
        }
    }

    Ok(Json(JobMatchesResponse { matches }))
}

/// POST /api/v1/matching/applicants
///
/// Ranks applicants whose preferences fit one job.
pub async fn handle_applicant_matches(
    State(state): State<AppState>,
    Json(request): Json<ApplicantMatchesRequest>,
) -> Result<Json<ApplicantMatchesResponse>, AppError> {
    let min_score = resolve_min_score(request.min_score)?;
    validate_salaries(request.job.salary, None)?;
    for candidate in &request.candidates {
        validate_salaries(None, candidate.preferences.min_salary)?;
    }

    let matches = rank_applicants(&state.matcher, &request.job, &request.candidates, min_score);
    info!(
        candidates = request.candidates.len(),
        matches = matches.len(),
        "applicant matches ranked"
    );

    Ok(Json(ApplicantMatchesResponse { matches }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn resolve_min_score(min_score: Option<f64>) -> Result<f64, AppError> {
    match min_score {
        None => Ok(DEFAULT_MIN_SCORE),
        Some(s) if (0.0..=1.0).contains(&s) => Ok(s),
        Some(s) => Err(AppError::Validation(format!(
            "min_score must be between 0 and 1, got {s}"
        ))),
    }
}

fn validate_salaries(salary: Option<f64>, min_salary: Option<f64>) -> Result<(), AppError> {
    for (field, value) in [("salary", salary), ("min_salary", min_salary)] {
        if matches!(value, Some(v) if v < 0.0) {
            return Err(AppError::Validation(format!("{field} must not be negative")));
        }
    }
    Ok(())
}
