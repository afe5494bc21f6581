//! Party affiliation and vote position enums.
//!
//! `Party` serializes as the free-form string used by the corpus
//! (`"Republican"`, `"Democratic"`, anything else kept verbatim). A missing
//! or null party is `Unknown` and serializes back to `null`.
//! `VotePosition` uses `snake_case` serialization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Party
// ---------------------------------------------------------------------------

/// Party affiliation of a legislator.
///
/// Only the two major parties take part in partisanship classification;
/// every other label is preserved as `Other` so party-position lookups still
/// work for independents and minor parties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Party {
    Republican,
    Democratic,
    Other(String),
    /// No affiliation on record (e.g. inactive members).
    #[default]
    Unknown,
}

impl Party {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Republican => "Republican",
            Self::Democratic => "Democratic",
            Self::Other(name) => name,
            Self::Unknown => "Unknown",
        }
    }

    /// Whether this is one of the two parties counted by the classifier.
    #[must_use]
    pub const fn is_major(&self) -> bool {
        matches!(self, Self::Republican | Self::Democratic)
    }
}

impl From<String> for Party {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Republican" => Self::Republican,
            "Democratic" => Self::Democratic,
            _ => Self::Other(value),
        }
    }
}

impl From<Option<String>> for Party {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unknown, Self::from)
    }
}

impl From<&str> for Party {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Party> for Option<String> {
    fn from(value: Party) -> Self {
        match value {
            Party::Other(name) => Some(name),
            Party::Unknown => None,
            major => Some(major.as_str().to_string()),
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VotePosition
// ---------------------------------------------------------------------------

/// Which side of a roll call a vote landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VotePosition {
    Yes,
    No,
}

impl VotePosition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for VotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
