//! **pathviz-core** — shared types for the pathviz grid search visualizer.
//!
//! This crate provides geometry primitives, the [`Cell`] data model, the
//! [`Board`] a front end edits between runs, and a cancellation
//! [`Context`] for paced execution.

pub mod board;
pub mod cell;
pub mod context;
pub mod geom;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use context::Context;
pub use geom::{Point, Range};
