//! Device type descriptors

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Identity of a device type as shown to users
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceTypeDescriptor {
    /// Short machine-usable code, e.g. `ricoh-aficio`
    pub code: String,
    /// Human-readable name, e.g. `Ricoh Aficio-compatible`
    pub friendly_name: String,
}

impl DeviceTypeDescriptor {
    pub fn new(code: impl Into<String>, friendly_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            friendly_name: friendly_name.into(),
        }
    }
}

impl Display for DeviceTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.friendly_name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let descriptor = DeviceTypeDescriptor::new("ricoh-aficio", "Ricoh Aficio-compatible");
        assert_eq!(descriptor.to_string(), "Ricoh Aficio-compatible [ricoh-aficio]");
    }
}
