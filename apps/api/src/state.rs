use std::sync::Arc;

use crate::config::Config;
use crate::matching::matcher::PreferenceMatcher;
use crate::notifications::NotificationDispatcher;
use crate::screening::engine::ScreeningEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub screening: Arc<ScreeningEngine>,
    /// Built once from the matching tables; read-only afterwards.
    pub matcher: Arc<PreferenceMatcher>,
    pub notifier: NotificationDispatcher,
}
