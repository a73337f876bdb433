//! Endpoint selection policies.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Policy governing which endpoint [`Discovery::get`](crate::Discovery::get) returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectMode {
    /// Uniformly random choice among the current endpoints.
    #[default]
    Random,
    /// Cyclic choice visiting every endpoint once per full pass.
    RoundRobin,
}

impl SelectMode {
    /// Returns the numeric code of this mode (`0` random, `1` round-robin).
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Random => 0,
            Self::RoundRobin => 1,
        }
    }
}

impl TryFrom<i32> for SelectMode {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Random),
            1 => Ok(Self::RoundRobin),
            other => Err(Error::UnsupportedSelectionMode(other.to_string())),
        }
    }
}

impl FromStr for SelectMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "random" => Ok(Self::Random),
            "round-robin" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(Error::UnsupportedSelectionMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("random"),
            Self::RoundRobin => f.write_str("round-robin"),
        }
    }
}
