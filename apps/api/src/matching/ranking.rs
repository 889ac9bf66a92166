use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::matcher::{match_percent, PreferenceMatcher};
use crate::models::applicant::ApplicantPreferences;
use crate::models::job::JobPosting;

/// Listings below this score are not worth surfacing (2 of 4 points).
pub const DEFAULT_MIN_SCORE: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub job_id: Uuid,
    #[serde(default)]
    pub title: String,
    pub posting: JobPosting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    pub job_id: Uuid,
    pub title: String,
    pub score: f64,
    pub match_percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub applicant_id: Uuid,
    pub preferences: ApplicantPreferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedApplicant {
    pub applicant_id: Uuid,
    pub score: f64,
    pub match_percent: u32,
}

/// Jobs that fit `prefs` at or above `min_score`, best first. Ties keep
/// listing order.
pub fn rank_jobs(
    matcher: &PreferenceMatcher,
    prefs: &ApplicantPreferences,
    listings: &[JobListing],
    min_score: f64,
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = listings
        .iter()
        .map(|listing| {
            let score = matcher.match_score(&listing.posting, prefs);
            RankedJob {
                job_id: listing.job_id,
                title: listing.title.clone(),
                score,
                match_percent: match_percent(score),
            }
        })
        .filter(|r| r.score >= min_score)
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Applicants whose preferences fit `posting` at or above `min_score`,
/// best first.
pub fn rank_applicants(
    matcher: &PreferenceMatcher,
    posting: &JobPosting,
    candidates: &[Candidate],
    min_score: f64,
) -> Vec<RankedApplicant> {
    let mut ranked: Vec<RankedApplicant> = candidates
        .iter()
        .map(|candidate| {
            let score = matcher.match_score(posting, &candidate.preferences);
            RankedApplicant {
                applicant_id: candidate.applicant_id,
                score,
                match_percent: match_percent(score),
            }
        })
        .filter(|r| r.score >= min_score)
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
