//! # Throwdown
//!
//! Provably fair generalized rock-paper-scissors for the terminal.
//!
//! The classic game extends to any odd number of uniquely labeled throws:
//! each throw beats the half of the set listed just before it cyclically and
//! loses to the half listed just after it. Before the player moves, the
//! computer opponent publishes an HMAC-SHA256 tag binding it to a throw it
//! has already chosen; after the round it reveals the HMAC key so the player
//! can check the throw was never changed.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          THROWDOWN                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure game rules                          │
//! │  ├── throws.rs   - Validated throw sets and indices         │
//! │  ├── judge.rs    - Cyclic dominance judging                 │
//! │  └── rules.rs    - Derived dominance matrix + help table    │
//! │                                                             │
//! │  fairness/       - Commit-reveal protocol                   │
//! │  └── commitment.rs - HMAC-SHA256 commitments                │
//! │                                                             │
//! │  game/           - Round flow (no I/O)                      │
//! │  └── session.rs  - Round state machine                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! A commitment is **binding**: changing the throw after the tag is
//! published would require forging an HMAC-SHA256 tag for the new label.
//! It is **hiding**: without the key the tag is indistinguishable from
//! random, so it leaks nothing about the chosen throw. All randomness is
//! injected explicitly, so commitments are reproducible under a seeded
//! generator in tests and unpredictable under `OsRng` in play.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod fairness;
pub mod game;

// Re-export commonly used types
pub use core::judge::{compare, Outcome};
pub use core::rules::RulesMatrix;
pub use core::throws::{ConfigError, ThrowIndex, ThrowSet};
pub use fairness::commitment::{commit, verify, CommitTag, Commitment, IntegrityError, Reveal};
pub use game::session::{GameSession, RoundReport, SessionError, SessionPhase};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
