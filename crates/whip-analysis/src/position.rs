//! Party positions and contradiction checks.

use whip_core::entities::{Bill, SessionKey, VoteEvent};
use whip_core::enums::{Party, VotePosition};
use whip_core::responses::BillFinding;
use whip_corpus::{CorpusError, LegislatorCache};

use crate::partisan::{PartyCounts, count_block};

/// The side most of `party` voted on. Ties resolve to `No`.
#[must_use]
pub fn party_position(yes: &PartyCounts, no: &PartyCounts, party: &Party) -> VotePosition {
    if yes.of(party) > no.of(party) {
        VotePosition::Yes
    } else {
        VotePosition::No
    }
}

/// Resolve both vote lists of `event` concurrently and return the party's position.
pub async fn resolve_party_position(
    cache: &LegislatorCache,
    event: &VoteEvent,
    party: &Party,
) -> Result<VotePosition, CorpusError> {
    let (yes, no) = tokio::try_join!(
        count_block(cache, &event.yes_votes),
        count_block(cache, &event.no_votes),
    )?;
    Ok(party_position(&yes, &no, party))
}

/// True when the legislator voted against the party position.
#[must_use]
pub fn contradicts(cast: VotePosition, position: VotePosition) -> bool {
    cast != position
}

/// Compare `leg_id`'s vote on the bill's first vote event with `party`'s position.
///
/// Returns `None` when the bill has no vote event or the legislator did not
/// cast a yes or no vote on it.
pub async fn assess_bill(
    cache: &LegislatorCache,
    session: &SessionKey,
    bill: &Bill,
    leg_id: &str,
    party: &Party,
) -> Result<Option<BillFinding>, CorpusError> {
    let Some(event) = bill.first_vote() else {
        return Ok(None);
    };
    let Some(cast) = event.cast_by(leg_id) else {
        return Ok(None);
    };

    let party_position = resolve_party_position(cache, event, party).await?;
    Ok(Some(BillFinding {
        bill_id: bill.bill_id.clone(),
        session: session.clone(),
        party_position,
        cast,
        contradicted: contradicts(cast, party_position),
    }))
}
