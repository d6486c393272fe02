//! Settings for [`TicketServiceImpl`](super::TicketServiceImpl).
//!
//! Plain data with builder-style setters. Loading it from files or the environment is left to
//! the host application; the serde derives are there so it can be embedded in a larger config.

use serde::{Deserialize, Serialize};

/// How the payment and reservation legs are run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DispatchMode {
    /// Payment, then reservation, on the caller's task. Reservation is skipped if payment fails.
    Sequential,
    /// Each leg in its own spawned task, joined before returning.
    #[default]
    Spawned,
    /// Both legs submitted to a dedicated pool of `workers` tasks owned by the service.
    Pooled { workers: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketServiceConfig {
    pub dispatch: DispatchMode,
}

impl TicketServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = dispatch;
        self
    }
}
