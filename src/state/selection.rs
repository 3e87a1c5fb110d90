//! Selection state management.
//!
//! The selected marker itself lives in the marker registry; this state
//! holds what the details panel shows for it. Detail rows are rebuilt
//! from scratch on every selection change, never edited in place.

use pinscope::TableRow;

/// State related to the current pin selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Rows currently shown in the details table
    detail_rows: Vec<TableRow>,
}

impl SelectionState {
    /// Creates a new selection state with nothing selected.
    pub fn new() -> Self {
        Self {
            detail_rows: Vec::new(),
        }
    }

    /// Clears the detail rows.
    pub fn clear(&mut self) {
        self.detail_rows.clear();
    }

    /// Returns the rows for the details table, empty when nothing is
    /// selected.
    pub fn detail_rows(&self) -> &[TableRow] {
        &self.detail_rows
    }

    /// Replaces the detail rows wholesale.
    pub fn set_detail_rows(&mut self, rows: Vec<TableRow>) {
        self.detail_rows = rows;
    }
}
