//! What callers do with a screening result: derive the application status,
//! render whole-number scores, and apply an HR override. None of this feeds
//! back into the engine.

use serde::{Deserialize, Serialize};

use crate::screening::engine::{ScreeningResult, PASS_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    UnderReview,
    ScreenedOut,
    HrApproved,
}

impl ApplicationStatus {
    pub fn from_result(result: &ScreeningResult) -> Self {
        if result.passed {
            ApplicationStatus::UnderReview
        } else {
            ApplicationStatus::ScreenedOut
        }
    }
}

/// Whole-number rendering used for display and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: u32,
    pub education_score: u32,
    pub experience_score: u32,
    pub skills_score: u32,
}

impl From<&ScreeningResult> for ScoreSummary {
    fn from(result: &ScreeningResult) -> Self {
        Self {
            score: whole(result.score),
            education_score: whole(result.education_score),
            experience_score: whole(result.experience_score),
            skills_score: whole(result.skills_score),
        }
    }
}

fn whole(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Forces a pass at the threshold score. Component scores and applicant
/// facts are kept as screened.
pub fn apply_hr_override(result: &ScreeningResult) -> ScreeningResult {
    ScreeningResult {
        score: PASS_THRESHOLD,
        passed: true,
        ..result.clone()
    }
}
