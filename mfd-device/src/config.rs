//! Device configuration
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use mfd_device::DeviceConfig;
//! use std::time::Duration;
//!
//! let config = DeviceConfig::builder()
//!     .page_size(200)
//!     .retry_interval(Duration::from_millis(500))
//!     .build()?;
//! # Ok::<(), mfd_device::MfdError>(())
//! ```

use mfd_core::{MfdError, MfdResult};
use mfd_session::SessionConfig;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Settings shared by all devices a backend opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Idle timeout requested from the device when starting a session
    pub session_timeout_secs: u32,
    /// Maximum number of entries fetched by the entry id query
    pub page_size: u32,
    /// Protocol versions known to work; others only produce a warning
    pub supported_protocol_versions: RangeInclusive<i32>,
    /// Pause between session open attempts while reopening
    pub retry_interval: Duration,
}

impl DeviceConfig {
    pub fn builder() -> DeviceConfigBuilder {
        DeviceConfigBuilder::new()
    }

    /// Session controller settings derived from this configuration
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.retry_interval)
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            session_timeout_secs: 30,
            page_size: 50,
            supported_protocol_versions: 302..=304,
            retry_interval: Duration::from_secs(1),
        }
    }
}

/// Builder for [`DeviceConfig`]
///
/// # Default Settings
/// - Session timeout: 30 seconds
/// - Page size: 50 entries
/// - Supported protocol versions: 302 to 304
/// - Retry interval: 1 second
#[derive(Debug, Clone, Default)]
pub struct DeviceConfigBuilder {
    config: DeviceConfig,
}

impl DeviceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_timeout_secs(mut self, secs: u32) -> Self {
        self.config.session_timeout_secs = secs;
        self
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.config.page_size = size;
        self
    }

    pub fn supported_protocol_versions(mut self, versions: RangeInclusive<i32>) -> Self {
        self.config.supported_protocol_versions = versions;
        self
    }

    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.config.retry_interval = interval;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// `InvalidData` if the page size is zero or the version range is empty
    pub fn build(self) -> MfdResult<DeviceConfig> {
        if self.config.page_size == 0 {
            return Err(MfdError::InvalidData("Page size must be at least 1".to_string()));
        }
        if self.config.supported_protocol_versions.is_empty() {
            return Err(MfdError::InvalidData(format!(
                "Empty protocol version range {:?}",
                self.config.supported_protocol_versions
            )));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeviceConfig::builder().build().unwrap();
        assert_eq!(config, DeviceConfig::default());
        assert_eq!(config.session_timeout_secs, 30);
        assert_eq!(config.page_size, 50);
        assert!(config.supported_protocol_versions.contains(&303));
        assert_eq!(config.session_config().retry_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_builder_overrides() {
        let config = DeviceConfig::builder()
            .session_timeout_secs(60)
            .page_size(10)
            .retry_interval(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(config.session_timeout_secs, 60);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.retry_interval, Duration::ZERO);
    }

    #[test]
    fn test_validation() {
        assert!(DeviceConfig::builder().page_size(0).build().is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let empty = 304..=302;
        assert!(DeviceConfig::builder()
            .supported_protocol_versions(empty)
            .build()
            .is_err());
    }
}
