use crate::models::applicant::{DegreeLevel, EducationRecord};

pub const EDUCATION_MAX_SCORE: f64 = 40.0;
const MEETS_SCORE: f64 = 30.0;
const ONE_BELOW_SCORE: f64 = 15.0;

/// Returns the applicant's highest ranked degree. Unranked (`Other`) records
/// never count, so an applicant with only those has no highest level.
/// On equal rank the earliest record wins.
pub fn highest_education(records: &[EducationRecord]) -> Option<DegreeLevel> {
    let mut highest: Option<DegreeLevel> = None;
    for record in records {
        let rank = record.degree_level.rank();
        if rank > highest.map_or(0, DegreeLevel::rank) {
            highest = Some(record.degree_level);
        }
    }
    highest
}

/// Scores the applicant's highest degree against the job's minimum:
/// exceeds → 40, meets → 30, one level below → 15, otherwise 0.
pub fn education_score(highest: Option<DegreeLevel>, required: DegreeLevel) -> f64 {
    let have = i16::from(highest.map_or(0, DegreeLevel::rank));
    let need = i16::from(required.rank());

    if have > need {
        EDUCATION_MAX_SCORE
    } else if have == need {
        MEETS_SCORE
    } else if have == need - 1 {
        ONE_BELOW_SCORE
    } else {
        0.0
    }
}
