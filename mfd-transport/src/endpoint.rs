//! Endpoint and protocol constants of the directory service

use mfd_core::SessionType;

/// Path of the directory service on the device's web server
pub const UDIRECTORY_PATH: &str = "/DH/udirectory";

/// Build the directory service endpoint URL for a host
pub fn endpoint_for(hostname: &str) -> String {
    format!("http://{}{}", hostname, UDIRECTORY_PATH)
}

/// Lock mode string requested when starting a session
pub fn lock_mode(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Shared => "S",
        SessionType::Exclusive => "X",
    }
}
