//! Preference matcher: scores how well a job fits an applicant's stated
//! preferences.
//!
//! Up to four criteria each add at most one point:
//! 1. category: exact → 1.0, related category → 0.5
//! 2. location: preferred text found in the job location → 1.0, same region → 0.5
//! 3. position type: exact → 1.0
//! 4. salary (only when both sides state one): meets minimum → 1.0,
//!    within 10% below → 0.5
//!
//! The total is divided by the number of criteria evaluated (3 or 4).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::matching::categories::{RelatedCategoryResolver, StaticCategoryDirectory};
use crate::matching::region::RegionResolver;
use crate::matching::tables::MatchingTables;
use crate::models::applicant::ApplicantPreferences;
use crate::models::job::JobPosting;

pub const FULL_CREDIT: f64 = 1.0;
pub const NEAR_MATCH_CREDIT: f64 = 0.5;
/// A salary at or above 90% of the minimum earns near-match credit.
pub const SALARY_TOLERANCE: f64 = 0.9;
const ALWAYS_EVALUATED: f64 = 3.0;

/// Per-criterion credit for one job/preferences pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub category: f64,
    pub location: f64,
    pub position_type: f64,
    /// `None` when either side has no salary; the criterion is then skipped.
    pub salary: Option<f64>,
    pub total: f64,
    pub max_possible: f64,
    pub score: f64,
    /// Why the job matches, one line per fully met criterion.
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub match_percent: u32,
}

impl MatchResult {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            match_percent: match_percent(score),
        }
    }
}

pub fn match_percent(score: f64) -> u32 {
    (score * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Clone)]
pub struct PreferenceMatcher {
    regions: RegionResolver,
    related: RelatedCategoryResolver,
}

impl PreferenceMatcher {
    pub fn new(regions: RegionResolver, related: RelatedCategoryResolver) -> Self {
        Self { regions, related }
    }

    /// Builds a matcher whose category directory is the tables' own list.
    pub fn from_tables(tables: MatchingTables) -> Self {
        let directory = Arc::new(StaticCategoryDirectory::new(tables.categories));
        Self::new(
            RegionResolver::new(tables.regions),
            RelatedCategoryResolver::new(tables.related_categories, directory),
        )
    }

    /// Normalized match score in `[0, 1]`.
    pub fn match_score(&self, job: &JobPosting, prefs: &ApplicantPreferences) -> f64 {
        self.breakdown(job, prefs).score
    }

    pub fn breakdown(&self, job: &JobPosting, prefs: &ApplicantPreferences) -> MatchBreakdown {
        let category = self.category_credit(job, prefs);
        let location = self.location_credit(job, prefs);
        let position_type = position_type_credit(job, prefs);
        let salary = salary_credit(job.salary, prefs.min_salary);

        let total = category + location + position_type + salary.unwrap_or(0.0);
        let max_possible = ALWAYS_EVALUATED + if salary.is_some() { 1.0 } else { 0.0 };

        let score = if max_possible > 0.0 {
            total / max_possible
        } else {
            0.0
        };
        let score = if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut reasons = Vec::new();
        if category == FULL_CREDIT {
            reasons.push("This job is in a category you're interested in.".to_string());
        }
        if position_type == FULL_CREDIT {
            reasons.push(format!(
                "This is a {} position, which matches your preference.",
                job.position_type
            ));
        }
        if location == FULL_CREDIT {
            reasons.push(format!(
                "The job location ({}) matches your preferred location.",
                job.location
            ));
        }
        if salary == Some(FULL_CREDIT) {
            reasons.push("The salary meets or exceeds your minimum salary requirement.".to_string());
        }

        MatchBreakdown {
            category,
            location,
            position_type,
            salary,
            total,
            max_possible,
            score,
            reasons,
        }
    }

    fn category_credit(&self, job: &JobPosting, prefs: &ApplicantPreferences) -> f64 {
        if prefs.categories.contains(&job.category) {
            return FULL_CREDIT;
        }
        if prefs.categories.is_empty() {
            return 0.0;
        }

        let related = self.related.related_categories_of(&job.category);
        if prefs.categories.iter().any(|c| related.contains(c)) {
            NEAR_MATCH_CREDIT
        } else {
            0.0
        }
    }

    fn location_credit(&self, job: &JobPosting, prefs: &ApplicantPreferences) -> f64 {
        let preferred: Vec<&str> = prefs
            .locations
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        let job_location = job.location.to_lowercase();
        if preferred
            .iter()
            .any(|loc| job_location.contains(&loc.to_lowercase()))
        {
            return FULL_CREDIT;
        }

        let job_region = self.regions.region_of(&job.location);
        if preferred
            .iter()
            .any(|loc| self.regions.region_of(loc) == job_region)
        {
            NEAR_MATCH_CREDIT
        } else {
            0.0
        }
    }
}

fn position_type_credit(job: &JobPosting, prefs: &ApplicantPreferences) -> f64 {
    if prefs.position_types.contains(&job.position_type) {
        FULL_CREDIT
    } else {
        0.0
    }
}

/// `None` unless both amounts are stated. Zero, negative and non-finite
/// amounts count as not stated.
fn salary_credit(offered: Option<f64>, minimum: Option<f64>) -> Option<f64> {
    let stated = |v: Option<f64>| v.filter(|a| a.is_finite() && *a > 0.0);
    let (offered, minimum) = (stated(offered)?, stated(minimum)?);

    Some(if offered >= minimum {
        FULL_CREDIT
    } else if offered >= minimum * SALARY_TOLERANCE {
        NEAR_MATCH_CREDIT
    } else {
        0.0
    })
}
