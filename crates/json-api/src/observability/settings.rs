//! Settings read by the request middleware on every call.

use std::{sync::OnceLock, time::Duration};

use tracing::warn;

use crate::config::observability::ObservabilityConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RequestSettings {
    pub(super) slow_request_threshold: Duration,
    pub(super) propagate_parent: bool,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            slow_request_threshold: Duration::from_secs(1),
            propagate_parent: false,
        }
    }
}

impl From<&ObservabilityConfig> for RequestSettings {
    fn from(config: &ObservabilityConfig) -> Self {
        Self {
            slow_request_threshold: Duration::from_millis(config.slow_request_threshold_ms),
            propagate_parent: config.otel.enabled && config.otel.propagate_parent,
        }
    }
}

static REQUEST_SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

pub(super) fn install(config: &ObservabilityConfig) {
    if REQUEST_SETTINGS.set(config.into()).is_err() {
        warn!("request settings were already installed; keeping the first values");
    }
}

/// Installed settings, or the defaults when none were installed (as in tests).
pub(super) fn current() -> RequestSettings {
    REQUEST_SETTINGS.get().copied().unwrap_or_default()
}
