use std::collections::VecDeque;

use crate::algorithm::Algorithm;
use crate::engine::{Draw, RunState, SearchEngine};
use crate::error::SearchError;
use crate::event::Observer;
use crate::pacing::Pacer;

impl<P: Pacer> SearchEngine<P> {
    /// Breadth-first search.
    ///
    /// Every traversable neighbor of a committed cell is queued, visited or
    /// not; a neighbor's parent is written only while it has none, so the
    /// first cell to discover it wins. No costs are tracked.
    pub fn bfs<O: Observer>(&mut self, observer: &mut O) -> Result<RunState, SearchError> {
        self.begin(Algorithm::Bfs)?;
        let outcome = self.bfs_loop(observer);
        self.end(Algorithm::Bfs, outcome)
    }

    fn bfs_loop<O: Observer>(&mut self, observer: &mut O) -> Result<bool, SearchError> {
        let mut queue: VecDeque<usize> = VecDeque::from([self.start]);

        while let Some(ci) = queue.pop_front() {
            match self.draw(ci, observer)? {
                Draw::Finish => return Ok(true),
                Draw::Skip => continue,
                Draw::Commit => {}
            }

            let nbuf = self.take_neighbors(ci);
            for &ni in nbuf.iter() {
                queue.push_back(ni);
                let n = &mut self.cells[ni];
                if n.parent.is_none() && ni != self.start {
                    n.parent = Some(ci);
                }
            }
            self.restore_neighbors(nbuf);
        }

        Ok(false)
    }
}
