//! Session controller configuration

use std::time::Duration;

/// Configuration of a [`SessionController`](crate::SessionController)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause between two session open attempts inside `reopen`
    pub retry_interval: Duration,
}

impl SessionConfig {
    pub fn new(retry_interval: Duration) -> Self {
        Self { retry_interval }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            retry_interval: Duration::from_secs(1),
        }
    }
}
