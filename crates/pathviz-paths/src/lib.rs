//! Paced grid searches for visualization.
//!
//! A [`SearchEngine`] is configured with a copy of a board's cells and then
//! runs one of five traversals over the 4-connected grid:
//!
//! - **BFS** ([`SearchEngine::bfs`]) in layer order
//! - **DFS** ([`SearchEngine::dfs`]) with an explicit stack
//! - **Dijkstra** ([`SearchEngine::dijkstra`]) with unit step costs
//! - **Greedy best-first** ([`SearchEngine::greedy`]) on Manhattan distance
//! - **A\*** ([`SearchEngine::astar`]) on `g + h`, ties to the smaller `h`
//!
//! Every committed cell is reported to an [`Observer`] as a
//! [`SearchEvent::Visited`] and followed by a pause handed to a [`Pacer`].
//! Once the finish is reached, [`SearchEngine::get_path`] replays the route
//! as [`SearchEvent::Path`] events.
//!
//! Neighbors are always produced in up, right, down, left order (see
//! [`GridTopology`]); visitation orders are deterministic for a given grid.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod error;
mod event;
mod greedy;
mod neighbors;
mod pacing;
mod path;
mod priority_queue;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use engine::{RunState, SearchEngine};
pub use error::SearchError;
pub use event::{Observer, SearchEvent};
pub use neighbors::GridTopology;
pub use pacing::{NoDelay, PATH_PACING, Pacer, SearchSpeed, SleepPacer};
pub use priority_queue::PriorityQueue;
