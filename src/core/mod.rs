//! Pure game-rule primitives.
//!
//! Everything here is deterministic and free of I/O: validated throw
//! configuration, the dominance judge, and the derived rules matrix.

pub mod judge;
pub mod rules;
pub mod throws;

// Re-export core types
pub use judge::{compare, Outcome};
pub use rules::{build, RulesMatrix};
pub use throws::{ConfigError, ThrowIndex, ThrowSet};
