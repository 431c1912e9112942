//! Dominance Matrix
//!
//! Derived view of the judge over all ordered throw pairs, plus the text
//! table shown as help. No independent game logic lives here.

use serde::Serialize;

use crate::core::judge::{compare, Outcome};
use crate::core::throws::{ThrowIndex, ThrowSet};

/// Corner cell of the rendered table's header row.
const CORNER_LABEL: &str = "(throws)";

/// Minimum gap between rendered columns.
const COLUMN_GAP: usize = 2;

/// The full n×n dominance relation of a throw set.
///
/// `outcome(row, col)` stores `compare(set, row, col)`: the outcome of
/// the column throw judged against the row throw. Never mutated once
/// built; n stays small, so nothing is cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RulesMatrix {
    size: usize,
    cells: Vec<Outcome>,
}

/// Build the matrix by judging every ordered pair in `set`.
pub fn build(set: &ThrowSet) -> RulesMatrix {
    let size = set.len();
    let mut cells = Vec::with_capacity(size * size);
    for row in set.throws() {
        for col in set.throws() {
            cells.push(compare(set, row, col));
        }
    }
    RulesMatrix { size, cells }
}

impl RulesMatrix {
    /// Number of throws on each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Outcome of the column throw judged against the row throw.
    pub fn outcome(&self, row: ThrowIndex, col: ThrowIndex) -> Outcome {
        self.cells[row.index() * self.size + col.index()]
    }

    /// Render the help table.
    ///
    /// Each cell answers "how does the row throw fare against the column
    /// throw", so a row reads as that throw's record against the field.
    /// Columns are padded to the widest label.
    pub fn render(&self, set: &ThrowSet) -> String {
        let width = cell_width(set);
        let mut table = String::new();
        pad_cell(&mut table, CORNER_LABEL, width);
        for col in set.throws() {
            pad_cell(&mut table, set.label(col), width);
        }
        table.push('\n');
        for row in set.throws() {
            pad_cell(&mut table, set.label(row), width);
            for col in set.throws() {
                // The row throw is the judged side, so its result lives
                // in the transposed cell.
                let cell = self.outcome(col, row);
                pad_cell(&mut table, &cell.to_string(), width);
            }
            table.push('\n');
        }
        table
    }
}

fn cell_width(set: &ThrowSet) -> usize {
    let widest = set.labels().iter().map(|l| l.len()).max().unwrap_or(0);
    widest.max(CORNER_LABEL.len()) + COLUMN_GAP
}

fn pad_cell(out: &mut String, text: &str, width: usize) {
    out.push_str(&format!("{text:<width$}"));
}
