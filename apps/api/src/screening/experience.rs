use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use crate::models::applicant::WorkExperienceRecord;

pub const EXPERIENCE_MAX_SCORE: f64 = 40.0;
pub const POINTS_PER_YEAR: f64 = 8.0;

/// Length of an average year (365.25 days) in seconds.
const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parses the date shapes profile forms have produced over time. Returns
/// `None` for anything else.
pub fn parse_record_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    // Year-month only: first of the month
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Years spent in a single job. Current jobs run to `now`. Unparseable dates
/// and end-before-start records contribute zero.
pub fn record_years(record: &WorkExperienceRecord, now: DateTime<Utc>) -> f64 {
    let Some(start) = record.start_date.as_deref().and_then(parse_record_date) else {
        debug!(company = %record.company, "unparseable start date, counting zero years");
        return 0.0;
    };

    let end = if record.is_current {
        now
    } else {
        match record.end_date.as_deref().and_then(parse_record_date) {
            Some(end) => end,
            None => {
                debug!(company = %record.company, "unparseable end date, counting zero years");
                return 0.0;
            }
        }
    };

    let years = (end - start).num_seconds() as f64 / SECONDS_PER_YEAR;
    years.max(0.0)
}

/// Sum of every record's duration. Overlapping jobs add up.
pub fn total_experience_years(records: &[WorkExperienceRecord], now: DateTime<Utc>) -> f64 {
    records.iter().map(|r| record_years(r, now)).sum()
}

pub fn experience_score(total_years: f64) -> f64 {
    (total_years * POINTS_PER_YEAR).clamp(0.0, EXPERIENCE_MAX_SCORE)
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn make_experience(
        start: Option<&str>,
        end: Option<&str>,
        is_current: bool,
    ) -> WorkExperienceRecord {
        WorkExperienceRecord {
            job_title: "Developer".to_string(),
            company: "Acme".to_string(),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            is_current,
            skills: vec![],
            responsibilities: String::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_accepted_shapes() {
        let expected = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_record_date("2020-03-01"), Some(expected));
        assert_eq!(parse_record_date("2020/03/01"), Some(expected));
        assert_eq!(parse_record_date("2020-03"), Some(expected));
        assert_eq!(parse_record_date("2020-03-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_record_date("2020-03-01 00:00:00"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_record_date("last spring"), None);
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("2020-13-45"), None);
    }

    #[test]
    fn test_exact_five_years_caps_at_40() {
        let start = now() - Duration::seconds((5.0 * SECONDS_PER_YEAR) as i64);
        let record = make_experience(
            Some(&start.to_rfc3339()),
            Some(&now().to_rfc3339()),
            false,
        );
        let years = total_experience_years(&[record], now());
        assert_eq!(years, 5.0);
        assert_eq!(experience_score(years), 40.0);
    }

    #[test]
    fn test_two_and_a_half_years_scores_20() {
        let start = now() - Duration::seconds((2.5 * SECONDS_PER_YEAR) as i64);
        let record = make_experience(Some(&start.to_rfc3339()), None, true);
        let years = total_experience_years(&[record], now());
        assert_eq!(years, 2.5);
        assert_eq!(experience_score(years), 20.0);
    }

    #[test]
    fn test_current_job_ignores_end_date() {
        let record = make_experience(Some("2023-01-01"), Some("garbage"), true);
        let years = record_years(&record, now());
        assert!((years - 365.0 / 365.25).abs() < 1e-9, "years was {years}");
    }

    #[test]
    fn test_overlapping_jobs_add() {
        let a = make_experience(Some("2020-01-01"), Some("2021-01-01"), false);
        let b = make_experience(Some("2020-01-01"), Some("2021-01-01"), false);
        let total = total_experience_years(&[a.clone()], now());
        assert!((total_experience_years(&[a, b], now()) - 2.0 * total).abs() < 1e-9);
    }

    #[test]
    fn test_bad_dates_contribute_zero() {
        let missing_end = make_experience(Some("2020-01-01"), None, false);
        let bad_start = make_experience(Some("soon"), Some("2021-01-01"), false);
        let reversed = make_experience(Some("2022-01-01"), Some("2021-01-01"), false);
        assert_eq!(
            total_experience_years(&[missing_end, bad_start, reversed], now()),
            0.0
        );
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(2.46), 2.5);
        assert_eq!(round_to_tenth(0.04), 0.0);
    }
}
