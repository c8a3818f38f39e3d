//! Reaction event type (added or removed)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a reaction was put on a message or taken off it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "reaction_added", alias = "added")]
    Added,
    #[serde(rename = "reaction_removed", alias = "removed")]
    Removed,
}

/// Error when parsing an event type from a log cell
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction event type: {0:?}")]
pub struct EventTypeParseError(pub String);

impl EventType {
    /// Name written into the reaction log
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Added => "reaction_added",
            Self::Removed => "reaction_removed",
        }
    }

    /// Multiplier applied to a rule's increment
    #[inline]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Added => 1,
            Self::Removed => -1,
        }
    }

    /// Parse the log's wire name, also accepting the short forms
    pub fn parse(s: &str) -> Result<Self, EventTypeParseError> {
        match s.trim() {
            "reaction_added" | "added" => Ok(Self::Added),
            "reaction_removed" | "removed" => Ok(Self::Removed),
            other => Err(EventTypeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl std::str::FromStr for EventType {
    type Err = EventTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
