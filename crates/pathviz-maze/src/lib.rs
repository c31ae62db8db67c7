//! Wall layouts for the pathviz board: a random scatter and a
//! recursive-division maze.

pub mod error;
pub mod mazegen;

pub use error::MazeError;
pub use mazegen::{MazeGenerator, MazeType, Orientation};
