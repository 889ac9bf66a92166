//! Notification decisions and delivery.
//!
//! Scoring never notifies. Handlers turn results into `Notice`s with the pure
//! policy functions below and hand them to the `NotificationDispatcher`,
//! which delivers on a background task. Delivery failures are logged and
//! dropped.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::matching::ranking::RankedJob;
use crate::screening::engine::ScreeningResult;
use crate::screening::review::ScoreSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Notice {
    /// Tells the applicant how screening went.
    ScreeningOutcome {
        application_id: Uuid,
        applicant_id: Uuid,
        passed: bool,
        score: u32,
    },
    /// Tells HR staff an applicant passed screening.
    QualifiedApplicant {
        application_id: Uuid,
        job_id: Option<Uuid>,
    },
    JobMatch {
        applicant_id: Uuid,
        job_id: Uuid,
        match_percent: u32,
    },
}

/// Where notices end up (email, in-app inbox, ...).
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, notice: Notice) -> anyhow::Result<()>;
}

/// Writes each notice to the log. Used until a real delivery channel is
/// wired in.
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn deliver(&self, notice: Notice) -> anyhow::Result<()> {
        info!(?notice, "notification queued");
        Ok(())
    }
}

/// Applicant outcome notice, plus an HR notice when the applicant passed.
pub fn screening_notices(
    application_id: Uuid,
    applicant_id: Uuid,
    job_id: Option<Uuid>,
    result: &ScreeningResult,
) -> Vec<Notice> {
    let mut notices = vec![Notice::ScreeningOutcome {
        application_id,
        applicant_id,
        passed: result.passed,
        score: ScoreSummary::from(result).score,
    }];

    if result.passed {
        notices.push(Notice::QualifiedApplicant {
            application_id,
            job_id,
        });
    }
    notices
}

/// One notice per ranked job scoring at or above `threshold`.
pub fn job_match_notices(applicant_id: Uuid, ranked: &[RankedJob], threshold: f64) -> Vec<Notice> {
    ranked
        .iter()
        .filter(|job| job.score >= threshold)
        .map(|job| Notice::JobMatch {
            applicant_id,
            job_id: job.job_id,
            match_percent: job.match_percent,
        })
        .collect()
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    sink: Arc<dyn NotificationSink>,
}

impl NotificationDispatcher {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    /// Delivers `notices` in order on a spawned task. Callers may drop the
    /// handle.
    pub fn dispatch(&self, notices: Vec<Notice>) -> JoinHandle<()> {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            for notice in notices {
                if let Err(e) = sink.deliver(notice.clone()).await {
                    warn!(?notice, error = %e, "notification delivery failed");
                }
            }
        })
    }
}
