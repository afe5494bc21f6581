//! # whip-analysis
//!
//! Finds the partisan bills a legislator voted on and whether each vote broke
//! with their party.
//!
//! - [`partisan`]: classifies vote blocks and bills by one-party dominance.
//! - [`position`]: resolves a party's majority position and compares a cast
//!   vote against it.
//! - [`AnalysisPipeline`]: runs the whole computation for one configured
//!   legislator and produces a [`whip_core::responses::ContradictionReport`].
//!
//! Only the first vote event of a bill (`votes[0]`) is ever examined.

mod error;
pub mod partisan;
mod pipeline;
pub mod position;
#[cfg(test)]
mod test_support;

pub use error::AnalysisError;
pub use pipeline::AnalysisPipeline;
