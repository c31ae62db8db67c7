use crate::algorithm::Algorithm;
use crate::engine::{Draw, RunState, SearchEngine};
use crate::error::SearchError;
use crate::event::Observer;
use crate::pacing::Pacer;

impl<P: Pacer> SearchEngine<P> {
    /// Depth-first search.
    ///
    /// Unvisited neighbors are pushed onto a stack in up, right, down, left
    /// order, so the left neighbor is explored first. Each push overwrites
    /// the neighbor's parent with the current cell.
    pub fn dfs<O: Observer>(&mut self, observer: &mut O) -> Result<RunState, SearchError> {
        self.begin(Algorithm::Dfs)?;
        let outcome = self.dfs_loop(observer);
        self.end(Algorithm::Dfs, outcome)
    }

    fn dfs_loop<O: Observer>(&mut self, observer: &mut O) -> Result<bool, SearchError> {
        let mut stack: Vec<usize> = vec![self.start];

        while let Some(ci) = stack.pop() {
            match self.draw(ci, observer)? {
                Draw::Finish => return Ok(true),
                Draw::Skip => continue,
                Draw::Commit => {}
            }

            let nbuf = self.take_neighbors(ci);
            for &ni in nbuf.iter() {
                let n = &mut self.cells[ni];
                if n.is_visited {
                    continue;
                }
                n.parent = Some(ci);
                stack.push(ni);
            }
            self.restore_neighbors(nbuf);
        }

        Ok(false)
    }
}
