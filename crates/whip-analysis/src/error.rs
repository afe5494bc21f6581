//! Analysis error types.

use thiserror::Error;
use whip_corpus::CorpusError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Reading or parsing a corpus document failed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// The legislator's role history names no session with a chamber.
    #[error("legislator {legislator_id} has no sessions with a known chamber")]
    NoSessions { legislator_id: String },
}
