//! Throw Set Configuration
//!
//! A validated, immutable set of throw labels. Construction is the only
//! place the configuration invariants are checked; every other module may
//! assume any `ThrowSet` it sees is well-formed.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Errors raised when constructing a [`ThrowSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than three labels were supplied.
    #[error("at least 3 throws are required, got {0}")]
    TooFew(usize),
    /// An even number of labels was supplied. In an even set one throw
    /// would sit equidistant from another in both cyclic directions,
    /// leaving the dominance relation ambiguous.
    #[error("the number of throws must be odd, got {0}")]
    EvenCount(usize),
    /// The same label appeared more than once.
    #[error("duplicate throw label {0:?}")]
    DuplicateLabel(String),
    /// A label was empty.
    #[error("throw labels must not be empty")]
    EmptyLabel,
}

/// Position of a throw within its [`ThrowSet`].
///
/// Only a `ThrowSet` mints these (bounds-checked lookup or random draw),
/// so holding one is proof the position is in range. Labels are purely
/// presentational; all judging happens on positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ThrowIndex(usize);

impl ThrowIndex {
    /// Zero-based position within the set.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The ordered throw labels configured for a game.
///
/// Invariants, enforced at construction and untouchable afterwards:
/// at least 3 labels, an odd count, all labels unique and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThrowSet {
    labels: Vec<String>,
}

impl ThrowSet {
    /// Validate `labels` into a `ThrowSet`, preserving their order.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() < 3 {
            return Err(ConfigError::TooFew(labels.len()));
        }
        if labels.len() % 2 == 0 {
            return Err(ConfigError::EvenCount(labels.len()));
        }
        for (i, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(ConfigError::EmptyLabel);
            }
            if labels[..i].contains(label) {
                return Err(ConfigError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels })
    }

    /// Number of throws in the set. Always odd and at least 3.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false: a validated set holds at least three throws.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Mint the throw at `index`, if it is in range.
    pub fn throw(&self, index: usize) -> Option<ThrowIndex> {
        (index < self.labels.len()).then_some(ThrowIndex(index))
    }

    /// Label of a throw minted by this set.
    pub fn label(&self, throw: ThrowIndex) -> &str {
        &self.labels[throw.0]
    }

    /// All throws in configured order.
    pub fn throws(&self) -> impl Iterator<Item = ThrowIndex> + '_ {
        (0..self.labels.len()).map(ThrowIndex)
    }

    /// All labels in configured order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Draw a uniformly random throw.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> ThrowIndex {
        ThrowIndex(rng.gen_range(0..self.labels.len()))
    }
}
