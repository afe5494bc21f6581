//! # whip-core
//!
//! Core types shared across all whip crates.
//!
//! This crate provides:
//! - Record structs for the corpus documents (legislators, bills, vote events)
//! - Party and vote-position enums
//! - Session keys that locate a bill directory
//! - Report types emitted by `whip report`

pub mod entities;
pub mod enums;
pub mod responses;
