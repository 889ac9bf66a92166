use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the built-in region and category tables.
    pub matching_tables_path: Option<PathBuf>,
    /// Minimum match score (0..1) that produces a job-match notice.
    pub job_match_notify_threshold: f64,
    pub screening_batch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            matching_tables_path: None,
            job_match_notify_threshold: 0.5,
            screening_batch_limit: 50,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let job_match_notify_threshold = optional_env("JOB_MATCH_NOTIFY_THRESHOLD")
            .map(|v| {
                v.parse::<f64>()
                    .context("JOB_MATCH_NOTIFY_THRESHOLD must be a number")
            })
            .transpose()?
            .unwrap_or(defaults.job_match_notify_threshold);
        if !(0.0..=1.0).contains(&job_match_notify_threshold) {
            anyhow::bail!("JOB_MATCH_NOTIFY_THRESHOLD must be between 0 and 1");
        }

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>().context("PORT must be a valid port number"))
                .transpose()?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            matching_tables_path: optional_env("MATCHING_TABLES_PATH").map(PathBuf::from),
            job_match_notify_threshold,
            screening_batch_limit: optional_env("SCREENING_BATCH_LIMIT")
                .map(|v| parse_batch_limit(&v))
                .transpose()?
                .unwrap_or(defaults.screening_batch_limit),
        })
    }
}

fn parse_batch_limit(raw: &str) -> Result<usize> {
    let limit = raw
        .parse::<usize>()
        .context("SCREENING_BATCH_LIMIT must be a positive integer")?;
    if limit == 0 {
        anyhow::bail!("SCREENING_BATCH_LIMIT must be a positive integer");
    }
    Ok(limit)
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_limit_must_be_positive() {
        assert_eq!(parse_batch_limit("25").unwrap(), 25);
        let err = parse_batch_limit("0").unwrap_err();
        assert!(err.to_string().contains("SCREENING_BATCH_LIMIT"));
        assert!(parse_batch_limit("-3").is_err());
        assert!(parse_batch_limit("many").is_err());
    }
}
