//! Report types returned by `whip` commands.
//!
//! These structs define the JSON shape of `whip report` and `whip sessions`.
//! `whip schema` prints the schema of [`ContradictionReport`].

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::SessionKey;
use crate::enums::VotePosition;

/// Outcome for one partisan bill the legislator voted on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BillFinding {
    pub bill_id: String,
    pub session: SessionKey,
    /// Majority position of the measured party on the first vote event.
    pub party_position: VotePosition,
    /// How the legislator voted on the first vote event.
    pub cast: VotePosition,
    pub contradicted: bool,
}

/// Response from `whip report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContradictionReport {
    pub legislator_id: String,
    /// Party whose position was measured.
    pub party: String,
    pub threshold: f64,
    pub sessions: Vec<SessionKey>,
    /// Bill id → whether the legislator voted against the party position.
    pub contradictions: BTreeMap<String, bool>,
    pub findings: Vec<BillFinding>,
}

impl ContradictionReport {
    /// Number of bills where the legislator broke with the party.
    #[must_use]
    pub fn contradiction_count(&self) -> usize {
        self.contradictions.values().filter(|flag| **flag).count()
    }
}

/// Response from `whip sessions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionsResponse {
    pub legislator_id: String,
    pub party: String,
    pub sessions: Vec<SessionKey>,
}
