use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::applicant::DegreeLevel;
use crate::models::lenient::deserialize_skill_list;

/// Opaque category identifier. Numeric ids from storage are kept in their
/// decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => CategoryId(s),
            Raw::Number(n) => CategoryId(n.to_string()),
        })
    }
}

/// The part of a job posting the screening engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub min_education_level: DegreeLevel,
    #[serde(default)]
    pub min_experience_years: f64,
    #[serde(default, deserialize_with = "deserialize_skill_list")]
    pub required_skills: Vec<String>,
}

/// The part of a job posting the preference matcher reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub category: CategoryId,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub position_type: String,
    #[serde(default)]
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_accepts_number_or_string() {
        let id: CategoryId = serde_json::from_str("42").unwrap();
        assert_eq!(id, CategoryId::new("42"));
        let id: CategoryId = serde_json::from_str("\"computer_science\"").unwrap();
        assert_eq!(id.as_str(), "computer_science");
    }

    #[test]
    fn test_requirements_accept_comma_separated_skills() {
        let req: JobRequirements = serde_json::from_value(serde_json::json!({
            "min_education_level": "Bachelor",
            "min_experience_years": 2,
            "required_skills": "Python, SQL"
        }))
        .unwrap();
        assert_eq!(req.min_education_level, DegreeLevel::Bachelor);
        assert_eq!(req.required_skills, vec!["Python", "SQL"]);
    }
}
