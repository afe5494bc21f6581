//! Partisanship classification of vote blocks and bills.
//!
//! A vote block (the yes-votes or the no-votes of one roll call) is partisan
//! when the leading major party holds at least `threshold` of the block's
//! major-party votes. A bill is partisan when either of its blocks is.
//!
//! A block with no major-party votes is never partisan.

use std::collections::HashMap;

use whip_core::entities::{Bill, VoteRef};
use whip_core::enums::Party;
use whip_corpus::{CorpusError, LegislatorCache};

/// Number of resolved legislators per party in one vote block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyCounts {
    counts: HashMap<Party, usize>,
}

impl PartyCounts {
    pub fn tally<'a>(parties: impl IntoIterator<Item = &'a Party>) -> Self {
        let mut counts = HashMap::new();
        for party in parties {
            *counts.entry(party.clone()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Votes cast by members of `party`; zero when the party is absent.
    #[must_use]
    pub fn of(&self, party: &Party) -> usize {
        self.counts.get(party).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn republican(&self) -> usize {
        self.of(&Party::Republican)
    }

    #[must_use]
    pub fn democratic(&self) -> usize {
        self.of(&Party::Democratic)
    }

    /// Whether the leading major party reaches `threshold` of major-party votes.
    ///
    /// Ties are measured on the Democratic share.
    #[must_use]
    pub fn is_partisan(&self, threshold: f64) -> bool {
        let republican = self.republican();
        let democratic = self.democratic();
        let total = republican + democratic;
        if total == 0 {
            return false;
        }

        let leading = if republican > democratic {
            republican
        } else {
            democratic
        };
        #[allow(clippy::cast_precision_loss)]
        let share = leading as f64 / total as f64;
        share >= threshold
    }
}

/// Resolve a vote block through the cache and count it by party.
pub async fn count_block(
    cache: &LegislatorCache,
    votes: &[VoteRef],
) -> Result<PartyCounts, CorpusError> {
    let legislators = cache.resolve_votes(votes).await?;
    Ok(PartyCounts::tally(
        legislators.iter().map(|legislator| &legislator.party),
    ))
}

pub async fn is_partisan_vote_block(
    cache: &LegislatorCache,
    threshold: f64,
    votes: &[VoteRef],
) -> Result<bool, CorpusError> {
    Ok(count_block(cache, votes).await?.is_partisan(threshold))
}

/// Classify both blocks of the bill's first vote event concurrently.
pub async fn is_partisan_bill(
    cache: &LegislatorCache,
    threshold: f64,
    bill: &Bill,
) -> Result<bool, CorpusError> {
    let (yes, no) = tokio::try_join!(
        is_partisan_vote_block(cache, threshold, bill.yes_votes()),
        is_partisan_vote_block(cache, threshold, bill.no_votes()),
    )?;
    Ok(yes || no)
}
