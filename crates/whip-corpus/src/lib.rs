//! # whip-corpus
//!
//! Reads the Open States JSON export that whip analyses.
//!
//! - [`Corpus`] loads bill and legislator documents from the directory layout.
//! - [`LegislatorCache`] memoizes legislator lookups for the lifetime of a run
//!   and deduplicates concurrent reads of the same id.

mod cache;
mod error;
mod loader;

pub use cache::LegislatorCache;
pub use error::{CorpusError, RecordKind};
pub use loader::Corpus;
