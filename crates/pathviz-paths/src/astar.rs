use crate::algorithm::Algorithm;
use crate::engine::{Draw, RunState, SearchEngine};
use crate::error::SearchError;
use crate::event::Observer;
use crate::pacing::Pacer;
use crate::priority_queue::PriorityQueue;

impl<P: Pacer> SearchEngine<P> {
    /// A* search with the Manhattan heuristic.
    ///
    /// The frontier is ordered by `f = g + h`; among equal `f` the cell with
    /// the smaller `h` (closer to the finish) wins. Unlike Dijkstra and
    /// greedy search, a strictly cheaper route also moves the neighbor's
    /// parent.
    pub fn astar<O: Observer>(&mut self, observer: &mut O) -> Result<RunState, SearchError> {
        self.begin(Algorithm::AStar)?;
        let outcome = self.astar_loop(observer);
        self.end(Algorithm::AStar, outcome)
    }

    fn astar_loop<O: Observer>(&mut self, observer: &mut O) -> Result<bool, SearchError> {
        self.seed_start_cost();
        let topo = self.topology;
        let finish = self.finish;
        let mut open: PriorityQueue<usize, u32, u32> = PriorityQueue::new();
        let h = topo.distance(self.start, finish);
        open.enqueue_with_tie_break(self.start, h, h);

        while let Some(ci) = open.dequeue() {
            match self.draw(ci, observer)? {
                Draw::Finish => return Ok(true),
                Draw::Skip => continue,
                Draw::Commit => {}
            }

            let current_g = self.cells[ci].cost.unwrap_or(0);
            let nbuf = self.take_neighbors(ci);
            for &ni in nbuf.iter() {
                let n = &mut self.cells[ni];
                if n.is_visited {
                    continue;
                }
                let tentative_g = current_g + 1;
                if n.cost.is_some_and(|g| tentative_g >= g) {
                    continue;
                }
                n.cost = Some(tentative_g);
                n.parent = Some(ci);
                let h = topo.distance(ni, finish);
                open.enqueue_with_tie_break(ni, tentative_g + h, h);
            }
            self.restore_neighbors(nbuf);
        }

        Ok(false)
    }
}
