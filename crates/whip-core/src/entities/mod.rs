//! Record structs for corpus documents.
//!
//! Each struct mirrors the subset of an Open States JSON document that the
//! analysis consumes. Unknown fields are ignored on load, so only the consumed
//! fields survive a load/serialize round trip.

mod bill;
mod legislator;
mod session;

pub use bill::{Bill, VoteEvent, VoteRef};
pub use legislator::{Legislator, Role};
pub use session::SessionKey;
