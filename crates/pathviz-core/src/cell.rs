//! The [`Cell`] type — one board position and its search bookkeeping.

/// A single board cell.
///
/// `index` is the row-major position on the board and never changes. The
/// remaining fields are mutated by wall editing, maze generation, and the
/// search engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub index: usize,
    /// Predecessor on the search tree, `None` until assigned.
    pub parent: Option<usize>,
    pub is_wall: bool,
    pub is_visited: bool,
    /// Cumulative step cost from the start cell, `None` until discovered.
    pub cost: Option<u32>,
    pub is_start: bool,
    pub is_finish: bool,
}

impl Cell {
    /// A fresh, open cell at `index`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            parent: None,
            is_wall: false,
            is_visited: false,
            cost: None,
            is_start: false,
            is_finish: false,
        }
    }

    /// Forget everything a previous search run wrote into this cell.
    #[inline]
    pub fn reset_search(&mut self) {
        self.is_visited = false;
        self.parent = None;
        self.cost = None;
    }
}
