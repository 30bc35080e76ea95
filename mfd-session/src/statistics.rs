//! Session statistics

/// Counters kept by a [`SessionController`](crate::SessionController)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStatistics {
    /// Session start requests sent to the device
    pub open_attempts: u64,
    /// Start requests the device refused
    pub rejections: u64,
    /// Start requests the device granted
    pub established: u64,
    /// Termination requests sent to the device
    pub closes: u64,
    /// Termination requests the device rejected
    pub close_failures: u64,
}

impl SessionStatistics {
    pub fn new() -> Self {
        Self::default()
    }
}
