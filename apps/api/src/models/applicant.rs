use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::job::CategoryId;
use crate::models::lenient::deserialize_skill_list;

/// Degree levels ordered by rank. `Other` is unranked (rank 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DegreeLevel {
    HighSchool,
    Associate,
    Diploma,
    Bachelor,
    Master,
    PhD,
    Other,
}

impl DegreeLevel {
    pub fn rank(self) -> u8 {
        match self {
            DegreeLevel::HighSchool => 1,
            DegreeLevel::Associate => 2,
            DegreeLevel::Diploma => 3,
            DegreeLevel::Bachelor => 4,
            DegreeLevel::Master => 5,
            DegreeLevel::PhD => 6,
            DegreeLevel::Other => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DegreeLevel::HighSchool => "High School",
            DegreeLevel::Associate => "Associate",
            DegreeLevel::Diploma => "Diploma",
            DegreeLevel::Bachelor => "Bachelor",
            DegreeLevel::Master => "Master",
            DegreeLevel::PhD => "PhD",
            DegreeLevel::Other => "Other",
        }
    }

    /// Maps a free-text degree label onto a level. Unknown labels are `Other`.
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "highschool" | "secondary" => DegreeLevel::HighSchool,
            "associate" | "associates" => DegreeLevel::Associate,
            "diploma" => DegreeLevel::Diploma,
            "bachelor" | "bachelors" => DegreeLevel::Bachelor,
            "master" | "masters" => DegreeLevel::Master,
            "phd" | "doctorate" | "doctoral" => DegreeLevel::PhD,
            _ => DegreeLevel::Other,
        }
    }
}

impl From<String> for DegreeLevel {
    fn from(label: String) -> Self {
        DegreeLevel::from_label(&label)
    }
}

impl From<DegreeLevel> for String {
    fn from(level: DegreeLevel) -> Self {
        level.label().to_string()
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree_level: DegreeLevel,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// A single job held by the applicant. Dates stay as raw strings; the
/// screening engine decides what it can parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperienceRecord {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start_date: Option<String>,
    /// Ignored when `is_current` is set.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, deserialize_with = "deserialize_skill_list")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantPreferences {
    #[serde(default)]
    pub categories: BTreeSet<CategoryId>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub position_types: BTreeSet<String>,
    #[serde(default)]
    pub min_salary: Option<f64>,
}
