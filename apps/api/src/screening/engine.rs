//! Screening engine: scores an applicant's education, experience and skills
//! against a job's requirements.
//!
//! Score components and their bounds:
//! - education 0..=40 (highest degree vs the job's minimum)
//! - experience 0..=40 (8 points per year, summed across all jobs)
//! - skills 0..=20 (share of required skills covered)
//!
//! `score` is their sum; the applicant passes at 75 or above.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::models::applicant::{DegreeLevel, EducationRecord, WorkExperienceRecord};
use crate::models::job::JobRequirements;
use crate::screening::education::{education_score, highest_education};
use crate::screening::experience::{experience_score, round_to_tenth, total_experience_years};
use crate::screening::skills::{applicant_skills, skill_coverage, skills_score};

/// Fixed for every job.
pub const PASS_THRESHOLD: f64 = 75.0;

/// Rendered in place of a degree label when the applicant has no ranked degree.
pub const NO_EDUCATION: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub score: f64,
    pub education_score: f64,
    pub experience_score: f64,
    pub skills_score: f64,
    pub passed: bool,
    #[serde(with = "highest_level")]
    pub highest_education_level: Option<DegreeLevel>,
    pub total_experience_years: f64,
    pub matching_skills_count: usize,
    pub required_skills_count: usize,
}

impl ScreeningResult {
    pub fn highest_education_label(&self) -> &'static str {
        self.highest_education_level
            .map_or(NO_EDUCATION, DegreeLevel::label)
    }
}

pub fn passes_threshold(score: f64) -> bool {
    score >= PASS_THRESHOLD
}

/// Stateless apart from its clock; safe to share across requests.
#[derive(Clone)]
pub struct ScreeningEngine {
    clock: Arc<dyn Clock>,
}

impl ScreeningEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn screen(
        &self,
        education: &[EducationRecord],
        experience: &[WorkExperienceRecord],
        job: &JobRequirements,
    ) -> ScreeningResult {
        screen_at(self.clock.now(), education, experience, job)
    }
}

/// Screens with an explicit "now" for current jobs.
pub fn screen_at(
    now: DateTime<Utc>,
    education: &[EducationRecord],
    experience: &[WorkExperienceRecord],
    job: &JobRequirements,
) -> ScreeningResult {
    let highest = highest_education(education);
    let education_score = education_score(highest, job.min_education_level);

    let total_years = total_experience_years(experience, now);
    let experience_score = experience_score(total_years);

    let held = applicant_skills(experience);
    let coverage = skill_coverage(&job.required_skills, &held);
    let skills_score = skills_score(coverage);

    let score = education_score + experience_score + skills_score;
    let passed = passes_threshold(score);

    debug!(
        score,
        education_score,
        experience_score,
        skills_score,
        passed,
        "screening computed"
    );

    ScreeningResult {
        score,
        education_score,
        experience_score,
        skills_score,
        passed,
        highest_education_level: highest,
        total_experience_years: round_to_tenth(total_years),
        matching_skills_count: coverage.matching,
        required_skills_count: coverage.required,
    }
}

mod highest_level {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NO_EDUCATION;
    use crate::models::applicant::DegreeLevel;

    pub fn serialize<S>(level: &Option<DegreeLevel>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(level.map_or(NO_EDUCATION, DegreeLevel::label))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DegreeLevel>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|s| !s.eq_ignore_ascii_case(NO_EDUCATION))
            .map(DegreeLevel::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, TimeZone};

    const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn make_education(level: DegreeLevel) -> EducationRecord {
        EducationRecord {
            degree_level: level,
            field_of_study: "Computer Science".to_string(),
            institution: "SFU".to_string(),
            start_date: Some("2012-09-01".to_string()),
            end_date: Some("2016-04-30".to_string()),
            gpa: Some(3.4),
        }
    }

    /// A current job that started exactly `years` average years before `now()`.
    fn make_current_job(years: f64, skills: &[&str]) -> WorkExperienceRecord {
        let start = now() - Duration::seconds((years * SECONDS_PER_YEAR) as i64);
        WorkExperienceRecord {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: Some(start.to_rfc3339()),
            end_date: None,
            is_current: true,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            responsibilities: "Build things".to_string(),
        }
    }

    fn make_job(level: DegreeLevel, skills: &[&str]) -> JobRequirements {
        JobRequirements {
            min_education_level: level,
            min_experience_years: 2.0,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_score_is_sum_of_components() {
        let result = screen_at(
            now(),
            &[make_education(DegreeLevel::Master)],
            &[make_current_job(1.5, &["Rust"])],
            &make_job(DegreeLevel::Bachelor, &["Rust", "Go"]),
        );
        assert_eq!(result.education_score, 40.0);
        assert_eq!(result.experience_score, 12.0);
        assert_eq!(result.skills_score, 10.0);
        assert_eq!(
            result.score,
            result.education_score + result.experience_score + result.skills_score
        );
        assert!(!result.passed);
    }

    #[test]
    fn test_score_exactly_75_passes() {
        // 30 (meets) + 25 (3.125 years) + 20 (no skills listed)
        let result = screen_at(
            now(),
            &[make_education(DegreeLevel::Bachelor)],
            &[make_current_job(3.125, &[])],
            &make_job(DegreeLevel::Bachelor, &[]),
        );
        assert_eq!(result.score, 75.0);
        assert!(result.passed);
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(passes_threshold(75.0));
        assert!(!passes_threshold(74.999));
    }

    #[test]
    fn test_maximum_score_is_100() {
        let result = screen_at(
            now(),
            &[make_education(DegreeLevel::PhD)],
            &[make_current_job(12.0, &["python programming", "sql server"])],
            &make_job(DegreeLevel::Bachelor, &["Python", "SQL"]),
        );
        assert_eq!(result.score, 100.0);
        assert!(result.passed);
        assert_eq!(result.matching_skills_count, 2);
        assert_eq!(result.required_skills_count, 2);
    }

    #[test]
    fn test_empty_applicant_never_fails_hard() {
        let result = screen_at(now(), &[], &[], &make_job(DegreeLevel::Master, &["Rust"]));
        assert_eq!(result.score, 0.0);
        assert!(!result.passed);
        assert_eq!(result.highest_education_level, None);
        assert_eq!(result.highest_education_label(), "None");
        assert_eq!(result.total_experience_years, 0.0);
    }

    #[test]
    fn test_experience_years_rounded_to_tenth() {
        let result = screen_at(
            now(),
            &[],
            &[make_current_job(2.46, &[])],
            &make_job(DegreeLevel::Other, &[]),
        );
        assert_eq!(result.total_experience_years, 2.5);
        // score uses the unrounded duration
        assert!((result.experience_score - 2.46 * 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_is_idempotent() {
        let engine = ScreeningEngine::new(Arc::new(FixedClock(now())));
        let education = vec![make_education(DegreeLevel::Bachelor)];
        let experience = vec![make_current_job(4.2, &["Kubernetes", "Go"])];
        let job = make_job(DegreeLevel::Bachelor, &["go", "terraform"]);

        let first = engine.screen(&education, &experience, &job);
        let second = engine.screen(&education, &experience, &job);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_none_sentinel() {
        let result = screen_at(now(), &[], &[], &make_job(DegreeLevel::Other, &[]));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["highest_education_level"], "None");

        let back: ScreeningResult = serde_json::from_value(value).unwrap();
        assert_eq!(back.highest_education_level, None);
    }
}
