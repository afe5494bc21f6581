//! Memoized legislator lookups.
//!
//! The same legislator shows up in the vote lists of hundreds of bills, so
//! every lookup goes through one shared cache. Each id owns a
//! [`tokio::sync::OnceCell`]: the first caller performs the read while
//! concurrent callers for the same id wait on it, so each legislator is read
//! at most once per successful load. A failed read leaves the cell empty.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::try_join_all;
use tokio::sync::{Mutex, OnceCell};
use whip_core::entities::{Legislator, VoteRef};

use crate::error::CorpusError;
use crate::loader::Corpus;

type Slot = Arc<OnceCell<Arc<Legislator>>>;

pub struct LegislatorCache {
    corpus: Corpus,
    slots: Mutex<HashMap<String, Slot>>,
    reads: AtomicUsize,
}

impl LegislatorCache {
    #[must_use]
    pub fn new(corpus: Corpus) -> Self {
        Self {
            corpus,
            slots: Mutex::new(HashMap::new()),
            reads: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Resolve a legislator by id, reading it from disk on first use.
    pub async fn get(&self, leg_id: &str) -> Result<Arc<Legislator>, CorpusError> {
        let slot = {
            let mut slots = self.slots.lock().await;
            Arc::clone(slots.entry(leg_id.to_string()).or_default())
        };

        slot.get_or_try_init(|| async {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.corpus.load_legislator(leg_id).await.map(Arc::new)
        })
        .await
        .cloned()
    }

    /// Resolve every vote that carries a legislator id, concurrently and in
    /// order. Votes with a null id are dropped.
    pub async fn resolve_votes(&self, votes: &[VoteRef]) -> Result<Vec<Arc<Legislator>>, CorpusError> {
        try_join_all(
            votes
                .iter()
                .filter_map(|vote| vote.leg_id.as_deref())
                .map(|leg_id| self.get(leg_id)),
        )
        .await
    }

    /// Number of disk reads issued so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Number of legislators resolved and held by the cache.
    pub async fn len(&self) -> usize {
        self.slots
            .lock()
            .await
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
