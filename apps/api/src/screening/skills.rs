use serde::{Deserialize, Serialize};

use crate::models::applicant::WorkExperienceRecord;

pub const SKILLS_MAX_SCORE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCoverage {
    pub matching: usize,
    pub required: usize,
}

/// Lowercased skills from every experience record, blanks removed.
pub fn applicant_skills(records: &[WorkExperienceRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.skills.iter())
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Loose bidirectional substring test on lowercased inputs. "java" matches
/// "javascript" and the other way round.
pub fn skill_matches(required: &str, held: &str) -> bool {
    held.contains(required) || required.contains(held)
}

/// Counts how many required skills are covered by any held skill. The
/// denominator is the number of non-blank required skills.
pub fn skill_coverage(required_skills: &[String], held: &[String]) -> SkillCoverage {
    let required: Vec<String> = required_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let matching = required
        .iter()
        .filter(|req| held.iter().any(|h| skill_matches(req, h)))
        .count();

    SkillCoverage {
        matching,
        required: required.len(),
    }
}

/// Full credit when the job lists no skills.
pub fn skills_score(coverage: SkillCoverage) -> f64 {
    if coverage.required == 0 {
        return SKILLS_MAX_SCORE;
    }
    coverage.matching as f64 / coverage.required as f64 * SKILLS_MAX_SCORE
}
