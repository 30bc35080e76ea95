//! Session credential encoding
//!
//! The directory service expects credentials as a `;`-separated list of
//! `KEY=value` pairs whose values are base64 encoded:
//!
//! ```text
//! SCHEME=QkFTSUM=;UID:UserName=YWRtaW4=;PWD:Password=
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Account used when the caller gives no username
pub const DEFAULT_USERNAME: &str = "admin";

const SCHEME_BASIC: &str = "BASIC";

/// Username and password for starting a session
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    username: String,
    password: String,
}

impl SessionCredentials {
    /// Create credentials; an empty username falls back to [`DEFAULT_USERNAME`]
    pub fn new(username: &str, password: &str) -> Self {
        let username = if username.is_empty() {
            DEFAULT_USERNAME
        } else {
            username
        };
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Encode as the `sessionInfo` parameter of a session start request
    pub fn to_session_info(&self) -> String {
        format!(
            "SCHEME={};UID:UserName={};PWD:Password={}",
            STANDARD.encode(SCHEME_BASIC),
            STANDARD.encode(&self.username),
            STANDARD.encode(&self.password),
        )
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
