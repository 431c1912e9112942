//! Dominance Judging
//!
//! The cyclic beats/loses relation: in a set of n throws (n odd), each
//! throw beats the floor(n/2) throws listed just before it cyclically and
//! loses to the floor(n/2) listed just after it.

use std::fmt;

use serde::Serialize;

use crate::core::throws::{ThrowIndex, ThrowSet};

/// Result of one throw judged against another.
///
/// Always read relative to a stated perspective: [`compare`] returns the
/// outcome of its *second* argument against the first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// The judged throw beats the other.
    Win,
    /// The judged throw loses to the other.
    Lose,
    /// Both sides played the same throw.
    Draw,
}

impl Outcome {
    /// The same result seen from the other side.
    pub fn inverted(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Lose => write!(f, "Lose"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Judge `second` against `first` within `set`.
///
/// Walking forward cyclically from `first`, the next floor(n/2) throws
/// beat it and the rest lose to it; n odd means no throw is ever
/// equidistant both ways. `set` is consulted only for its size, but
/// taking it keeps the indices tied to the configuration that minted
/// them. Pure and total for any two throws of `set`.
pub fn compare(set: &ThrowSet, first: ThrowIndex, second: ThrowIndex) -> Outcome {
    if first == second {
        return Outcome::Draw;
    }
    let n = set.len();
    // Cyclic distance from `first` forward to `second`, in 1..n.
    let distance = (second.index() + n - first.index()) % n;
    if distance <= n / 2 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set_of(n: usize) -> ThrowSet {
        ThrowSet::new((0..n).map(|i| format!("T{i}"))).unwrap()
    }

    fn throw(set: &ThrowSet, index: usize) -> ThrowIndex {
        set.throw(index).unwrap()
    }

    #[test]
    fn test_same_throw_is_a_draw() {
        let set = set_of(7);
        for t in set.throws() {
            assert_eq!(compare(&set, t, t), Outcome::Draw);
        }
    }

    #[test]
    fn test_classic_three_way() {
        let set = ThrowSet::new(["Rock", "Paper", "Scissors"]).unwrap();
        let (rock, paper, scissors) = (throw(&set, 0), throw(&set, 1), throw(&set, 2));
        // Paper covers Rock, Scissors cut Paper, Rock crushes Scissors.
        assert_eq!(compare(&set, rock, paper), Outcome::Win);
        assert_eq!(compare(&set, paper, scissors), Outcome::Win);
        assert_eq!(compare(&set, scissors, rock), Outcome::Win);
        assert_eq!(compare(&set, rock, scissors), Outcome::Lose);
    }

    #[test]
    fn test_five_way() {
        let set = ThrowSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
        // With k = 2, a throw loses to anything more than two steps ahead:
        // Lizard sits three after Rock, so Lizard loses.
        assert_eq!(compare(&set, throw(&set, 0), throw(&set, 3)), Outcome::Lose);
        // One and two steps ahead both win.
        assert_eq!(compare(&set, throw(&set, 0), throw(&set, 1)), Outcome::Win);
        assert_eq!(compare(&set, throw(&set, 0), throw(&set, 2)), Outcome::Win);
        // Wrap-around: Paper sits three after Lizard.
        assert_eq!(compare(&set, throw(&set, 3), throw(&set, 1)), Outcome::Lose);
    }

    #[test]
    fn test_balanced_dominance() {
        for n in [3usize, 5, 7, 9, 11] {
            let set = set_of(n);
            for t in set.throws() {
                // Judge `t` against every opponent: it must beat exactly
                // half the field and lose to the other half.
                let wins = set
                    .throws()
                    .filter(|o| *o != t && compare(&set, *o, t) == Outcome::Win)
                    .count();
                let losses = set
                    .throws()
                    .filter(|o| *o != t && compare(&set, *o, t) == Outcome::Lose)
                    .count();
                assert_eq!(wins, (n - 1) / 2);
                assert_eq!(losses, (n - 1) / 2);
            }
        }
    }

    proptest! {
        // Antisymmetry: between distinct throws there is always exactly
        // one winner, whichever side is judged.
        #[test]
        fn prop_antisymmetry(half in 1usize..8, a in 0usize..100, b in 0usize..100) {
            let size = 2 * half + 1;
            let set = set_of(size);
            let a = set.throw(a % size).unwrap();
            let b = set.throw(b % size).unwrap();
            if a == b {
                prop_assert_eq!(compare(&set, a, b), Outcome::Draw);
            } else {
                let forward = compare(&set, a, b);
                prop_assert_ne!(forward, Outcome::Draw);
                prop_assert_eq!(forward.inverted(), compare(&set, b, a));
            }
        }
    }
}
