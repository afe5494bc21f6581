//! End-to-end analysis for one legislator.
//!
//! 1. Load the legislator and derive the sessions they served
//! 2. Per session (concurrently): load every bill, keep the partisan ones
//! 3. Keep bills the legislator cast a yes or no vote on
//! 4. Compare each cast vote against the measured party's position

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::try_join_all;
use whip_config::WhipConfig;
use whip_core::entities::{Bill, Legislator, SessionKey};
use whip_core::enums::Party;
use whip_core::responses::{BillFinding, ContradictionReport};
use whip_corpus::{Corpus, CorpusError, LegislatorCache};

use crate::error::AnalysisError;
use crate::partisan::is_partisan_bill;
use crate::position::assess_bill;

/// Runs the contradiction analysis. Owns the legislator cache for its lifetime.
pub struct AnalysisPipeline {
    cache: LegislatorCache,
    legislator_id: String,
    threshold: f64,
    party: Option<Party>,
}

impl AnalysisPipeline {
    /// Build a pipeline from an already validated configuration.
    #[must_use]
    pub fn new(config: &WhipConfig) -> Self {
        let corpus = Corpus::new(&config.corpus.root, &config.corpus.state);
        Self {
            cache: LegislatorCache::new(corpus),
            legislator_id: config.analysis.legislator_id.clone(),
            threshold: config.analysis.threshold,
            party: config.analysis.party.as_deref().map(Party::from),
        }
    }

    #[must_use]
    pub const fn cache(&self) -> &LegislatorCache {
        &self.cache
    }

    /// The target legislator and the sessions they served.
    pub async fn sessions(&self) -> Result<(Arc<Legislator>, Vec<SessionKey>), AnalysisError> {
        let legislator = self.cache.get(&self.legislator_id).await?;
        let sessions = SessionKey::served_by(&legislator);
        if sessions.is_empty() {
            return Err(AnalysisError::NoSessions {
                legislator_id: self.legislator_id.clone(),
            });
        }
        Ok((legislator, sessions))
    }

    /// Every partisan bill of one session, in listing order.
    pub async fn partisan_bills(&self, session: &SessionKey) -> Result<Vec<Bill>, CorpusError> {
        let bills = self.cache.corpus().load_session_bills(session).await?;
        let flags = try_join_all(
            bills
                .iter()
                .map(|bill| is_partisan_bill(&self.cache, self.threshold, bill)),
        )
        .await?;

        let partisan: Vec<Bill> = bills
            .into_iter()
            .zip(flags)
            .filter_map(|(bill, partisan)| partisan.then_some(bill))
            .collect();
        tracing::debug!(%session, partisan = partisan.len(), "classified session bills");
        Ok(partisan)
    }

    /// Run the whole analysis and build the report.
    pub async fn run(&self) -> Result<ContradictionReport, AnalysisError> {
        let (legislator, sessions) = self.sessions().await?;
        let party = self
            .party
            .clone()
            .unwrap_or_else(|| legislator.party.clone());

        let per_session = try_join_all(sessions.iter().map(|session| async move {
            self.partisan_bills(session)
                .await
                .map(|bills| (session, bills))
        }))
        .await?;

        let voted: Vec<(&SessionKey, Bill)> = per_session
            .into_iter()
            .flat_map(|(session, bills)| bills.into_iter().map(move |bill| (session, bill)))
            .filter(|(_, bill)| {
                bill.first_vote()
                    .and_then(|event| event.cast_by(&self.legislator_id))
                    .is_some()
            })
            .collect();

        let findings: Vec<BillFinding> = try_join_all(voted.iter().map(|(session, bill)| {
            assess_bill(&self.cache, session, bill, &self.legislator_id, &party)
        }))
        .await?
        .into_iter()
        .flatten()
        .collect();

        tracing::debug!(
            bills = findings.len(),
            legislators_read = self.cache.reads(),
            "analysis complete"
        );

        Ok(ContradictionReport {
            legislator_id: self.legislator_id.clone(),
            party: party.to_string(),
            threshold: self.threshold,
            sessions,
            contradictions: contradiction_map(&findings),
            findings,
        })
    }
}

/// Bill id → contradiction flag. A bill id seen in several sessions keeps the
/// later session's flag.
fn contradiction_map(findings: &[BillFinding]) -> BTreeMap<String, bool> {
    let mut map = BTreeMap::new();
    for finding in findings {
        if let Some(previous) = map.insert(finding.bill_id.clone(), finding.contradicted) {
            tracing::warn!(
                bill_id = %finding.bill_id,
                session = %finding.session,
                previous,
                "bill id appears in several sessions; keeping the later one"
            );
        }
    }
    map
}
