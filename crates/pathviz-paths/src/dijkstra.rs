use crate::algorithm::Algorithm;
use crate::engine::{Draw, RunState, SearchEngine};
use crate::error::SearchError;
use crate::event::Observer;
use crate::pacing::Pacer;
use crate::priority_queue::PriorityQueue;

impl<P: Pacer> SearchEngine<P> {
    /// Dijkstra's algorithm with unit step cost.
    ///
    /// The frontier is ordered by tentative cost, ties by discovery order.
    /// A neighbor's cost is lowered whenever a cheaper route appears and it is
    /// then queued again, but its parent is the cell that first assigned it
    /// a cost.
    pub fn dijkstra<O: Observer>(&mut self, observer: &mut O) -> Result<RunState, SearchError> {
        self.begin(Algorithm::Dijkstra)?;
        let outcome = self.dijkstra_loop(observer);
        self.end(Algorithm::Dijkstra, outcome)
    }

    fn dijkstra_loop<O: Observer>(&mut self, observer: &mut O) -> Result<bool, SearchError> {
        self.seed_start_cost();
        let mut open: PriorityQueue<usize, u32> = PriorityQueue::new();
        open.enqueue(self.start, 0);

        while let Some(ci) = open.dequeue() {
            match self.draw(ci, observer)? {
                Draw::Finish => return Ok(true),
                Draw::Skip => continue,
                Draw::Commit => {}
            }

            let nbuf = self.take_neighbors(ci);
            for &ni in nbuf.iter() {
                if self.cells[ni].is_visited {
                    continue;
                }
                if let Some(cost) = self.relax_first_parent(ci, ni) {
                    open.enqueue(ni, cost);
                }
            }
            self.restore_neighbors(nbuf);
        }

        Ok(false)
    }
}
