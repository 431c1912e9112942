//! Commit-Reveal Fairness Protocol
//!
//! The opponent's move is fixed before the player commits to theirs:
//! publish a binding, hiding tag first, reveal the key afterwards so the
//! round can be audited.

pub mod commitment;

// Re-export key types
pub use commitment::{commit, verify, CommitTag, Commitment, IntegrityError, Reveal, Secret};
