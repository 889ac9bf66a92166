//! Lenient decoding for list fields that arrive either as JSON arrays or as
//! free-text strings from older profile forms.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillListInput {
    List(Vec<String>),
    Raw(String),
}

/// Parses a raw skill list. Tries a JSON array first, then falls back to a
/// comma-separated string. Entries are trimmed and blanks dropped.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => clean(list),
        Err(_) => clean(raw.split(',').map(str::to_string).collect()),
    }
}

/// Serde adapter for `Vec<String>` fields that accept an array, a string,
/// or nothing at all.
pub fn deserialize_skill_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<SkillListInput>::deserialize(deserializer)?;
    Ok(match input {
        Some(SkillListInput::List(list)) => clean(list),
        Some(SkillListInput::Raw(raw)) => parse_skill_list(&raw),
        None => Vec::new(),
    })
}

fn clean(list: Vec<String>) -> Vec<String> {
    list.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
