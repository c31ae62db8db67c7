//! Terminal front end for pathviz: builds a board from the command line,
//! lays out walls, and animates a search with crossterm.

pub mod config;
pub mod render;
pub mod run;

pub use config::{Config, Layout};
pub use render::TermView;
pub use run::{Summary, run};
