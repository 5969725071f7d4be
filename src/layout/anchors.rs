//! Anchor table: which grid cell each item index starts from.

use serde::{Deserialize, Serialize};

use super::types::GridCell;

/// Ordered list of anchor cells, indexed by item position.
///
/// Indices past the end of the table fall back to row-major order over
/// `grid_cols` columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnchorTable {
    cells: Vec<GridCell>,
}

impl AnchorTable {
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    /// A table with no entries; every index uses the fallback.
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Anchor cell for `index`.
    pub fn cell(&self, index: usize, grid_cols: usize) -> GridCell {
        match self.cells.get(index) {
            Some(cell) => *cell,
            None => fallback_cell(index, grid_cols),
        }
    }
}

impl Default for AnchorTable {
    /// The portfolio's hand-placed arrangement: who-am-i, hobbies, twitch,
    /// collaboration, education, coffee, experiences.
    fn default() -> Self {
        Self::new(vec![
            GridCell::new(0, 0),
            GridCell::new(1, 0),
            GridCell::new(0, 1),
            GridCell::new(0, 2),
            GridCell::new(3, 0),
            // Below the last row on purpose; the bounds clamp pulls it back.
            GridCell::new(3, 3),
            GridCell::new(2, 1),
        ])
    }
}

/// Row-major fallback for indices without a table entry.
pub fn fallback_cell(index: usize, grid_cols: usize) -> GridCell {
    let cols = grid_cols.max(1);
    GridCell::new(index % cols, index / cols)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_anchors.rs"]
mod tests;
