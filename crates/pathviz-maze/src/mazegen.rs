//! Maze generation over a row-major board.
//!
//! Provides two wall layouts:
//! - **Random**: scatters a random number of walls over the board.
//! - **Recursive division**: walls off the outer ring, then splits the board
//!   into chambers with walls that each leave a single passage.
//!
//! Both return cell indices and never emit an excluded index, so the start
//! and finish markers can be protected by passing them as `excluded`.

use std::collections::HashSet;

use log::debug;
use pathviz_core::{Point, Range};
use rand::{Rng, RngExt};

use crate::error::MazeError;

/// Lower bound on the number of random wall attempts. Boards with fewer than
/// twice as many cells use half their cell count instead.
const RANDOM_MIN_WALLS: usize = 200;

/// Which wall layout to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MazeType {
    #[default]
    Random,
    RecursiveDivision,
}

/// Direction of a dividing wall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// The wall runs along a row.
    #[default]
    Horizontal,
    /// The wall runs along a column.
    Vertical,
}

impl Orientation {
    /// Orientation used to split a chamber: horizontal when its row extent
    /// exceeds its column extent, vertical otherwise.
    pub fn for_extent(rows: i32, cols: i32) -> Self {
        if rows > cols {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// Inclusive row and column bounds of a chamber still to be divided.
#[derive(Debug, Clone, Copy)]
struct Chamber {
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
}

impl Chamber {
    fn is_inverted(self) -> bool {
        self.bottom < self.top || self.right < self.left
    }

    fn orientation(self) -> Orientation {
        Orientation::for_extent(self.bottom - self.top, self.right - self.left)
    }
}

/// Maze generator for boards of any size.
///
/// The generator owns its random number generator, so a seeded RNG yields
/// reproducible layouts.
///
/// ```
/// use pathviz_maze::{MazeGenerator, MazeType, Orientation};
/// use rand::SeedableRng;
///
/// let mut mg = MazeGenerator::new(rand::rngs::StdRng::seed_from_u64(1));
/// let walls = mg
///     .generate(9, 7, &[10, 52], MazeType::RecursiveDivision, Orientation::Horizontal)
///     .unwrap();
/// assert!(!walls.contains(&10) && !walls.contains(&52));
/// ```
pub struct MazeGenerator<R: Rng> {
    pub rng: R,
    walls: Vec<usize>,
    excluded: HashSet<usize>,
    bounds: Range,
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            walls: Vec::new(),
            excluded: HashSet::new(),
            bounds: Range::default(),
        }
    }

    /// Generate the wall indices of a `width` × `height` board.
    ///
    /// `orientation` is the direction of the first dividing wall and is
    /// ignored by [`MazeType::Random`]. The result may contain duplicates.
    pub fn generate(
        &mut self,
        width: i32,
        height: i32,
        excluded: &[usize],
        maze_type: MazeType,
        orientation: Orientation,
    ) -> Result<Vec<usize>, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        self.bounds = Range::new(0, 0, width, height);
        self.excluded = excluded.iter().copied().collect();
        self.walls.clear();

        match maze_type {
            MazeType::Random => self.random_walls(),
            MazeType::RecursiveDivision => {
                self.outer_ring();
                let board = Chamber {
                    top: 0,
                    bottom: height - 1,
                    left: 0,
                    right: width - 1,
                };
                self.divide(board, orientation);
            }
        }

        debug!(
            "{maze_type:?} maze on {width}x{height}: {} walls",
            self.walls.len()
        );
        Ok(std::mem::take(&mut self.walls))
    }

    #[inline]
    fn width(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Record `p` as a wall unless it is off the board or excluded.
    fn add_wall(&mut self, p: Point) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = p.to_index(self.width());
        if !self.excluded.contains(&idx) {
            self.walls.push(idx);
        }
    }

    fn random_walls(&mut self) {
        let cells = self.bounds.len();
        let max = cells / 2;
        let count = self.rng.random_range(RANDOM_MIN_WALLS.min(max)..=max);
        for _ in 0..count {
            let idx = self.rng.random_range(0..cells);
            if !self.excluded.contains(&idx) {
                self.walls.push(idx);
            }
        }
    }

    fn outer_ring(&mut self) {
        let max = self.bounds.max;
        for p in self.bounds {
            if p.x == 0 || p.y == 0 || p.x == max.x - 1 || p.y == max.y - 1 {
                self.add_wall(p);
            }
        }
    }

    /// Pick `start + 2k` for a random `k >= 0`, no greater than `end`.
    fn pick_step(&mut self, start: i32, end: i32) -> i32 {
        let steps = (end - start) / 2;
        start + 2 * self.rng.random_range(0..=steps)
    }

    fn divide(&mut self, c: Chamber, orientation: Orientation) {
        if c.is_inverted() {
            return;
        }

        match orientation {
            Orientation::Horizontal => {
                let wall = self.pick_step(c.top, c.bottom);
                let passage = self.pick_step(c.left + 1, c.right + 1);
                for x in c.left - 1..=c.right + 1 {
                    if x != passage {
                        self.add_wall(Point::new(x, wall));
                    }
                }

                let above = Chamber {
                    bottom: wall - 2,
                    ..c
                };
                let below = Chamber { top: wall + 2, ..c };
                self.divide(above, above.orientation());
                self.divide(below, below.orientation());
            }
            Orientation::Vertical => {
                let wall = self.pick_step(c.left, c.right);
                let passage = self.pick_step(c.top + 1, c.bottom + 1);
                for y in c.top - 1..=c.bottom + 1 {
                    if y != passage {
                        self.add_wall(Point::new(wall, y));
                    }
                }

                let left = Chamber {
                    right: wall - 2,
                    ..c
                };
                let right = Chamber { left: wall + 2, ..c };
                self.divide(left, left.orientation());
                self.divide(right, right.orientation());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> MazeGenerator<StdRng> {
        MazeGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn rejects_empty_boards() {
        let mut mg = generator(0);
        for (w, h) in [(0, 5), (5, 0), (-3, 4), (4, -1)] {
            for kind in [MazeType::Random, MazeType::RecursiveDivision] {
                assert_eq!(
                    mg.generate(w, h, &[], kind, Orientation::Horizontal),
                    Err(MazeError::InvalidDimensions {
                        width: w,
                        height: h
                    })
                );
            }
        }
    }

    #[test]
    fn random_count_on_small_board_is_half_the_cells() {
        // 25 cells: the range collapses to exactly 12 attempts.
        let mut mg = generator(3);
        let walls = mg
            .generate(5, 5, &[], MazeType::Random, Orientation::Horizontal)
            .unwrap();
        assert_eq!(walls.len(), 12);
        assert!(walls.iter().all(|&i| i < 25));
    }

    #[test]
    fn random_count_on_large_board() {
        for seed in 0..8 {
            let mut mg = generator(seed);
            let walls = mg
                .generate(40, 30, &[], MazeType::Random, Orientation::Horizontal)
                .unwrap();
            assert!((200..=600).contains(&walls.len()), "{}", walls.len());
        }
    }

    #[test]
    fn single_cell_board_gets_no_random_walls() {
        let mut mg = generator(0);
        let walls = mg
            .generate(1, 1, &[], MazeType::Random, Orientation::Horizontal)
            .unwrap();
        assert!(walls.is_empty());
    }

    #[test]
    fn outer_ring_is_walled() {
        let (w, h) = (12, 9);
        let excluded = [0usize, (w * h - 1) as usize];
        let mut mg = generator(5);
        let walls = mg
            .generate(w, h, &excluded, MazeType::RecursiveDivision, Orientation::Vertical)
            .unwrap();
        let set: HashSet<usize> = walls.iter().copied().collect();
        for p in Range::new(0, 0, w, h) {
            let idx = p.to_index(w as usize);
            let on_ring = p.x == 0 || p.y == 0 || p.x == w - 1 || p.y == h - 1;
            if excluded.contains(&idx) {
                assert!(!set.contains(&idx));
            } else if on_ring {
                assert!(set.contains(&idx), "{p} not walled");
            }
        }
    }

    #[test]
    fn division_leaves_open_cells() {
        let mut mg = generator(11);
        let walls = mg
            .generate(25, 15, &[], MazeType::RecursiveDivision, Orientation::Horizontal)
            .unwrap();
        let set: HashSet<usize> = walls.into_iter().collect();
        assert!(set.len() < 25 * 15);
        assert!(set.iter().all(|&i| i < 25 * 15));
    }

    #[test]
    fn seeded_layouts_repeat() {
        for kind in [MazeType::Random, MazeType::RecursiveDivision] {
            let a = generator(42)
                .generate(20, 10, &[21], kind, Orientation::Horizontal)
                .unwrap();
            let b = generator(42)
                .generate(20, 10, &[21], kind, Orientation::Horizontal)
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn generator_is_reusable() {
        let mut mg = generator(9);
        let first = mg
            .generate(6, 6, &[], MazeType::RecursiveDivision, Orientation::Horizontal)
            .unwrap();
        let second = mg
            .generate(3, 3, &[4], MazeType::RecursiveDivision, Orientation::Horizontal)
            .unwrap();
        assert!(!first.is_empty());
        assert!(second.iter().all(|&i| i < 9 && i != 4));
    }

    #[test]
    fn orientation_follows_the_longer_extent() {
        assert_eq!(Orientation::for_extent(5, 3), Orientation::Horizontal);
        assert_eq!(Orientation::for_extent(3, 3), Orientation::Vertical);
        assert_eq!(Orientation::for_extent(0, 8), Orientation::Vertical);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names() {
        let json = serde_json::to_string(&MazeType::RecursiveDivision).unwrap();
        assert_eq!(json, "\"recursive_division\"");
        let o: Orientation = serde_json::from_str("\"vertical\"").unwrap();
        assert_eq!(o, Orientation::Vertical);
    }

    fn layout() -> impl Strategy<Value = (i32, i32, Vec<usize>, bool, bool, u64)> {
        (1i32..40, 1i32..30).prop_flat_map(|(w, h)| {
            let n = (w * h) as usize;
            (
                Just(w),
                Just(h),
                proptest::collection::vec(0..n, 0..6),
                any::<bool>(),
                any::<bool>(),
                any::<u64>(),
            )
        })
    }

    proptest! {
        #[test]
        fn never_walls_an_excluded_cell((w, h, excluded, division, vertical, seed) in layout()) {
            let kind = if division { MazeType::RecursiveDivision } else { MazeType::Random };
            let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
            let n = (w * h) as usize;
            let walls = generator(seed).generate(w, h, &excluded, kind, orientation).unwrap();
            for idx in &walls {
                prop_assert!(*idx < n);
                prop_assert!(!excluded.contains(idx));
            }
            if !division {
                prop_assert!(walls.len() <= n / 2);
            }
        }
    }
}
