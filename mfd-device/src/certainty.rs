//! Detection verdicts

use std::fmt::{self, Display};

/// Verdict of a device type probe
///
/// There is no "unsure" value: a probe that cannot tell must
/// still commit to one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Certainty {
    /// The device is not of the probed type
    DefinitelyNo,
    /// The device is of the probed type
    DefinitelyYes,
}

impl Certainty {
    pub const fn is_yes(&self) -> bool {
        matches!(self, Certainty::DefinitelyYes)
    }
}

impl Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Certainty::DefinitelyNo => write!(f, "definitely no"),
            Certainty::DefinitelyYes => write!(f, "definitely yes"),
        }
    }
}
