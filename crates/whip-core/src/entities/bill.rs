use serde::{Deserialize, Serialize};

use crate::enums::VotePosition;

/// A bill record from `<root>/bills/<state>/<session>/<chamber>/<file>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub bill_id: String,
    #[serde(default)]
    pub votes: Vec<VoteEvent>,
}

impl Bill {
    /// The first recorded vote event. Later events are never analysed.
    #[must_use]
    pub fn first_vote(&self) -> Option<&VoteEvent> {
        self.votes.first()
    }

    /// Yes-votes of the first vote event, or an empty slice.
    #[must_use]
    pub fn yes_votes(&self) -> &[VoteRef] {
        self.first_vote()
            .map(|event| event.yes_votes.as_slice())
            .unwrap_or_default()
    }

    /// No-votes of the first vote event, or an empty slice.
    #[must_use]
    pub fn no_votes(&self) -> &[VoteRef] {
        self.first_vote()
            .map(|event| event.no_votes.as_slice())
            .unwrap_or_default()
    }
}

/// A single roll call on a bill.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
    #[serde(default)]
    pub yes_votes: Vec<VoteRef>,
    #[serde(default)]
    pub no_votes: Vec<VoteRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_votes: Vec<VoteRef>,
}

impl VoteEvent {
    /// The list of votes cast on the given side.
    #[must_use]
    pub fn votes_for(&self, position: VotePosition) -> &[VoteRef] {
        match position {
            VotePosition::Yes => &self.yes_votes,
            VotePosition::No => &self.no_votes,
        }
    }

    /// How `leg_id` voted in this event. A yes-vote takes precedence if the
    /// id appears on both lists.
    #[must_use]
    pub fn cast_by(&self, leg_id: &str) -> Option<VotePosition> {
        let cast_in = |votes: &[VoteRef]| votes.iter().any(|vote| vote.is(leg_id));
        if cast_in(self.yes_votes.as_slice()) {
            Some(VotePosition::Yes)
        } else if cast_in(self.no_votes.as_slice()) {
            Some(VotePosition::No)
        } else {
            None
        }
    }
}

/// A reference to a voting legislator. `leg_id` is null for voters the
/// corpus could not match to a legislator record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRef {
    #[serde(default)]
    pub leg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl VoteRef {
    #[must_use]
    pub fn is(&self, leg_id: &str) -> bool {
        self.leg_id.as_deref() == Some(leg_id)
    }
}
