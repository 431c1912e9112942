//! Game Flow
//!
//! Round sequencing for one human-versus-opponent session. No I/O here:
//! the binary owns the prompt loop and drives the state machine.

pub mod session;

// Re-export key types
pub use session::{GameSession, RoundReport, SessionError, SessionPhase};
