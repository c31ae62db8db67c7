//! The [`Board`] — a fixed-size grid of [`Cell`]s with a start and a finish
//! marker.
//!
//! A board is what a front end edits between runs: walls are painted or
//! generated, markers are dragged around, and previous search results are
//! cleared before the next run is configured.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Errors raised by [`Board`] construction and editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// The index does not address a cell of the board.
    OutOfBounds(usize),
    /// The target cell already carries the start or finish marker.
    Occupied(usize),
    /// The target cell is a wall.
    Wall(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions ({width}, {height})")
            }
            Self::OutOfBounds(i) => write!(f, "cell {i} is outside the board"),
            Self::Occupied(i) => write!(f, "cell {i} holds the start or finish marker"),
            Self::Wall(i) => write!(f, "cell {i} is a wall"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A row-major grid of cells with exactly one start and one finish.
///
/// Deserialization checks the same invariants as [`Board::new`] and rejects
/// cells whose flags disagree with the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardData"))]
pub struct Board {
    width: usize,
    height: usize,
    start: usize,
    finish: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardData {
    width: usize,
    height: usize,
    start: usize,
    finish: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardData> for Board {
    type Error = BoardError;

    fn try_from(data: BoardData) -> Result<Self, BoardError> {
        let BoardData {
            width,
            height,
            start,
            finish,
            cells,
        } = data;
        let len = cells.len();
        if width == 0 || height == 0 || width.checked_mul(height) != Some(len) {
            return Err(BoardError::InvalidDimensions {
                width: i32::try_from(width).unwrap_or(i32::MAX),
                height: i32::try_from(height).unwrap_or(i32::MAX),
            });
        }
        for idx in [start, finish] {
            if idx >= len {
                return Err(BoardError::OutOfBounds(idx));
            }
        }
        if start == finish {
            return Err(BoardError::Occupied(finish));
        }
        for (i, cell) in cells.iter().enumerate() {
            if cell.index != i {
                return Err(BoardError::OutOfBounds(cell.index));
            }
            if cell.is_start != (i == start) || cell.is_finish != (i == finish) {
                return Err(BoardError::Occupied(i));
            }
            if cell.is_wall && (i == start || i == finish) {
                return Err(BoardError::Wall(i));
            }
        }
        Ok(Self {
            width,
            height,
            start,
            finish,
            cells,
        })
    }
}

impl Board {
    /// Create an open board with the markers at `start` and `finish`.
    pub fn new(width: i32, height: i32, start: usize, finish: usize) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let (w, h) = (width as usize, height as usize);
        let len = w * h;
        for idx in [start, finish] {
            if idx >= len {
                return Err(BoardError::OutOfBounds(idx));
            }
        }
        if start == finish {
            return Err(BoardError::Occupied(finish));
        }

        let mut cells: Vec<Cell> = (0..len).map(Cell::new).collect();
        cells[start].is_start = true;
        cells[finish].is_finish = true;

        Ok(Self {
            width: w,
            height: h,
            start,
            finish,
            cells,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a board has at least two cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The board rectangle in point coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> usize {
        self.finish
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Point of a cell index.
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        Point::from_index(index, self.width)
    }

    /// Cell index of a point, or `None` outside the board.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.bounds().contains(p).then(|| p.to_index(self.width))
    }

    /// Indices of all wall cells, ascending.
    pub fn walls(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().filter(|c| c.is_wall).map(|c| c.index)
    }

    fn check(&self, index: usize) -> Result<(), BoardError> {
        if index < self.cells.len() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds(index))
        }
    }

    fn is_marker(&self, index: usize) -> bool {
        index == self.start || index == self.finish
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Flip the wall flag of a cell and return the new value.
    ///
    /// Start and finish cells can never become walls.
    pub fn toggle_wall(&mut self, index: usize) -> Result<bool, BoardError> {
        self.check(index)?;
        if self.is_marker(index) {
            return Err(BoardError::Occupied(index));
        }
        let cell = &mut self.cells[index];
        cell.is_wall = !cell.is_wall;
        Ok(cell.is_wall)
    }

    /// Turn every listed cell into a wall, skipping the markers and indices
    /// outside the board. Duplicates are harmless.
    ///
    /// Returns the number of cells that were not walls before.
    pub fn set_walls(&mut self, indices: &[usize]) -> usize {
        let mut added = 0;
        for &idx in indices {
            if idx >= self.cells.len() || self.is_marker(idx) {
                continue;
            }
            let cell = &mut self.cells[idx];
            if !cell.is_wall {
                cell.is_wall = true;
                added += 1;
            }
        }
        added
    }

    /// Relocate the start marker.
    pub fn move_start(&mut self, index: usize) -> Result<(), BoardError> {
        self.check_drop_target(index)?;
        self.cells[self.start].is_start = false;
        self.cells[index].is_start = true;
        self.start = index;
        Ok(())
    }

    /// Relocate the finish marker.
    pub fn move_finish(&mut self, index: usize) -> Result<(), BoardError> {
        self.check_drop_target(index)?;
        self.cells[self.finish].is_finish = false;
        self.cells[index].is_finish = true;
        self.finish = index;
        Ok(())
    }

    fn check_drop_target(&self, index: usize) -> Result<(), BoardError> {
        self.check(index)?;
        if self.is_marker(index) {
            return Err(BoardError::Occupied(index));
        }
        if self.cells[index].is_wall {
            return Err(BoardError::Wall(index));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Resets
    // -----------------------------------------------------------------------

    /// Forget the results of the previous search, keeping walls.
    ///
    /// Parents and costs are also dropped from cells that were discovered
    /// but never visited.
    pub fn clear_search(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_search();
        }
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_wall) {
            cell.is_wall = false;
            cell.reset_search();
        }
    }

    /// Remove walls and search results alike.
    pub fn clear_board(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_wall = false;
            cell.reset_search();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(4, 3, 0, 11).unwrap()
    }

    #[test]
    fn new_places_markers() {
        let b = board();
        assert_eq!(b.len(), 12);
        assert!(b.cells()[0].is_start);
        assert!(b.cells()[11].is_finish);
        assert_eq!(b.cells().iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(b.cells().iter().filter(|c| c.is_finish).count(), 1);
        assert!(b.cells().iter().enumerate().all(|(i, c)| c.index == i));
    }

    #[test]
    fn new_rejects_bad_input() {
        assert_eq!(
            Board::new(0, 3, 0, 1),
            Err(BoardError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(Board::new(2, 2, 0, 4), Err(BoardError::OutOfBounds(4)));
        assert_eq!(Board::new(2, 2, 1, 1), Err(BoardError::Occupied(1)));
    }

    #[test]
    fn index_point_conversions() {
        let b = board();
        assert_eq!(b.point(6), Point::new(2, 1));
        assert_eq!(b.index_of(Point::new(2, 1)), Some(6));
        assert_eq!(b.index_of(Point::new(4, 0)), None);
        assert_eq!(b.index_of(Point::new(0, -1)), None);
    }

    #[test]
    fn toggle_wall_skips_markers() {
        let mut b = board();
        assert_eq!(b.toggle_wall(5), Ok(true));
        assert_eq!(b.toggle_wall(5), Ok(false));
        assert_eq!(b.toggle_wall(0), Err(BoardError::Occupied(0)));
        assert_eq!(b.toggle_wall(11), Err(BoardError::Occupied(11)));
        assert_eq!(b.toggle_wall(12), Err(BoardError::OutOfBounds(12)));
    }

    #[test]
    fn set_walls_ignores_markers_and_duplicates() {
        let mut b = board();
        let added = b.set_walls(&[0, 3, 3, 7, 11, 40]);
        assert_eq!(added, 2);
        assert_eq!(b.walls().collect::<Vec<_>>(), vec![3, 7]);
    }

    #[test]
    fn move_markers() {
        let mut b = board();
        b.toggle_wall(5).unwrap();
        assert_eq!(b.move_start(5), Err(BoardError::Wall(5)));
        assert_eq!(b.move_start(11), Err(BoardError::Occupied(11)));
        b.move_start(4).unwrap();
        assert_eq!(b.start(), 4);
        assert!(!b.cells()[0].is_start);
        assert!(b.cells()[4].is_start);
        b.move_finish(0).unwrap();
        assert_eq!(b.finish(), 0);
        assert!(!b.cells()[11].is_finish);
    }

    #[test]
    fn clears() {
        let mut b = board();
        b.set_walls(&[2, 6]);
        b.cells[1].is_visited = true;
        b.cells[1].parent = Some(0);
        b.cells[5].cost = Some(2);

        b.clear_search();
        assert!(!b.cells()[1].is_visited);
        assert_eq!(b.cells()[1].parent, None);
        assert_eq!(b.cells()[5].cost, None);
        assert_eq!(b.walls().count(), 2);

        b.clear_walls();
        assert_eq!(b.walls().count(), 0);

        b.set_walls(&[2]);
        b.cells[3].is_visited = true;
        b.clear_board();
        assert_eq!(b.walls().count(), 0);
        assert!(b.cells().iter().all(|c| !c.is_visited));
        assert!(b.cells()[0].is_start);
    }
}
