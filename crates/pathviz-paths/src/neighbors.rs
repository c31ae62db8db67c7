use pathviz_core::{Cell, Point, Range};

use crate::distance::manhattan;

/// Index arithmetic for a row-major board.
///
/// Converts between linear cell indices and rows/columns and enumerates the
/// 4-directional neighbors of a cell in the fixed order up, right, down,
/// left. Depth-first search pushes neighbors in that order, so the order is
/// part of the observable behavior of every algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    width: usize,
    height: usize,
}

impl GridTopology {
    /// Topology of a `width` × `height` board.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn row(&self, index: usize) -> usize {
        index / self.width
    }

    #[inline]
    pub fn col(&self, index: usize) -> usize {
        index % self.width
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Point of a cell index (x = column, y = row).
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        Point::from_index(index, self.width)
    }

    #[inline]
    fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Manhattan distance between two cells.
    #[inline]
    pub fn distance(&self, a: usize, b: usize) -> u32 {
        manhattan(self.point(a), self.point(b)) as u32
    }

    /// Write the in-bounds cardinal neighbors of `index` for which `keep`
    /// returns `true` into `buf`, in up, right, down, left order.
    ///
    /// `buf` is cleared first.
    pub fn cardinal(&self, index: usize, keep: impl Fn(usize) -> bool, buf: &mut Vec<usize>) {
        buf.clear();
        let bounds = self.bounds();
        for n in self.point(index).neighbors_4() {
            if !bounds.contains(n) {
                continue;
            }
            let ni = n.to_index(self.width);
            if keep(ni) {
                buf.push(ni);
            }
        }
    }

    /// Write the traversable neighbors of `index` into `buf`: in bounds and
    /// not a wall. Visited cells are included.
    pub fn neighbors(&self, index: usize, cells: &[Cell], buf: &mut Vec<usize>) {
        self.cardinal(index, |i| !cells[i].is_wall, buf);
    }
}
