//! Round State Machine
//!
//! One `GameSession` runs many rounds against the committed opponent.
//! The session never blocks or prompts; the caller drives it iteratively:
//!
//! ```text
//! RoundComplete --start_round()--> AwaitingMove --resolve()--> RoundComplete
//!       |                              |
//!       +------------- end() ----------+--> Ended
//! ```
//!
//! `start_round` refuses while a move is pending, so a commitment can
//! never be replaced after the player has seen its tag.

use rand::{CryptoRng, Rng};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::judge::{compare, Outcome};
use crate::core::throws::{ThrowIndex, ThrowSet};
use crate::fairness::commitment::{commit, CommitTag, Commitment, IntegrityError, Reveal};

/// Where a session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    /// A commitment is published; the player's move is pending.
    AwaitingMove,
    /// Between rounds (including before the first).
    RoundComplete,
    /// The player has left; no further rounds.
    Ended,
}

/// State-machine misuse, or a violated commitment.
#[derive(Debug, Error)]
pub enum SessionError {
    /// `start_round` while a move is already pending.
    #[error("a round is already awaiting a move")]
    RoundInProgress,
    /// `resolve` with no round open.
    #[error("no round is awaiting a move")]
    NoPendingRound,
    /// Any round operation after `end`.
    #[error("the session has ended")]
    SessionOver,
    /// The opponent's reveal failed verification.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Everything the player gets to see once a round resolves.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// The player's throw.
    pub player: ThrowIndex,
    /// The throw the opponent had committed to.
    pub opponent: ThrowIndex,
    /// The player's result against the opponent.
    pub outcome: Outcome,
    /// Reveal of the opponent's commitment, already checked against the
    /// tag published at round start.
    pub reveal: Reveal,
}

/// One human-versus-opponent session over a fixed throw set.
///
/// Owns the injected RNG and the per-round commitment; performs no I/O
/// and never loops on its own.
pub struct GameSession<R> {
    throws: ThrowSet,
    rng: R,
    phase: SessionPhase,
    pending: Option<Commitment>,
    rounds_played: u32,
}

impl<R: Rng + CryptoRng> GameSession<R> {
    /// Start a session over `throws`, drawing all randomness from `rng`.
    pub fn new(throws: ThrowSet, rng: R) -> Self {
        Self {
            throws,
            rng,
            phase: SessionPhase::RoundComplete,
            pending: None,
            rounds_played: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The configured throw set.
    pub fn throws(&self) -> &ThrowSet {
        &self.throws
    }

    /// Rounds resolved so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Open a round: commit the opponent to a throw and publish the tag.
    pub fn start_round(&mut self) -> Result<CommitTag, SessionError> {
        match self.phase {
            SessionPhase::AwaitingMove => return Err(SessionError::RoundInProgress),
            SessionPhase::Ended => return Err(SessionError::SessionOver),
            SessionPhase::RoundComplete => {}
        }
        let commitment = commit(&self.throws, &mut self.rng);
        let tag = commitment.tag();
        self.pending = Some(commitment);
        self.phase = SessionPhase::AwaitingMove;
        debug!(round = self.rounds_played + 1, "commitment published");
        Ok(tag)
    }

    /// Resolve the open round with the player's move.
    ///
    /// Opens the pending commitment, checks its reveal against the
    /// published tag, and judges the player against the committed throw.
    /// A failed check means the round is compromised and surfaces as
    /// [`SessionError::Integrity`].
    pub fn resolve(&mut self, player: ThrowIndex) -> Result<RoundReport, SessionError> {
        if self.phase == SessionPhase::Ended {
            return Err(SessionError::SessionOver);
        }
        let commitment = self.pending.take().ok_or(SessionError::NoPendingRound)?;
        let tag = commitment.tag();
        let reveal = commitment.reveal();
        reveal.confirm(&tag, &self.throws)?;
        // Opponent first, player second: the outcome is the player's.
        let outcome = compare(&self.throws, reveal.throw, player);
        self.rounds_played += 1;
        self.phase = SessionPhase::RoundComplete;
        debug!(round = self.rounds_played, ?outcome, "round resolved");
        Ok(RoundReport {
            round: self.rounds_played,
            player,
            opponent: reveal.throw,
            outcome,
            reveal,
        })
    }

    /// End the session. Idempotent; discards any unplayed commitment.
    pub fn end(&mut self) {
        self.pending = None;
        self.phase = SessionPhase::Ended;
    }
}
