use crate::algorithm::Algorithm;
use crate::engine::{Draw, RunState, SearchEngine};
use crate::error::SearchError;
use crate::event::Observer;
use crate::pacing::Pacer;
use crate::priority_queue::PriorityQueue;

impl<P: Pacer> SearchEngine<P> {
    /// Greedy best-first search.
    ///
    /// The frontier is ordered purely by Manhattan distance to the finish;
    /// accumulated cost is tracked with the same relaxation as
    /// [`dijkstra`](Self::dijkstra) but never influences the order. A cell
    /// is queued once, when it is first discovered.
    pub fn greedy<O: Observer>(&mut self, observer: &mut O) -> Result<RunState, SearchError> {
        self.begin(Algorithm::Greedy)?;
        let outcome = self.greedy_loop(observer);
        self.end(Algorithm::Greedy, outcome)
    }

    fn greedy_loop<O: Observer>(&mut self, observer: &mut O) -> Result<bool, SearchError> {
        self.seed_start_cost();
        let topo = self.topology;
        let finish = self.finish;
        let mut open: PriorityQueue<usize, u32> = PriorityQueue::new();
        open.enqueue(self.start, topo.distance(self.start, finish));

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
                let discovered = self.cells[ni].cost.is_none();
                self.relax_first_parent(ci, ni);
                if discovered {
                    open.enqueue(ni, topo.distance(ni, finish));
                }
            }
            self.restore_neighbors(nbuf);
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::RunState;
    use crate::engine::tests::{engine, visits};
    use crate::event::SearchEvent;

    #[test]
    fn heads_straight_for_the_finish() {
        let mut e = engine(3, 3, 0, 8, &[]);
        let mut events: Vec<SearchEvent> = Vec::new();
        assert_eq!(e.greedy(&mut events), Ok(RunState::Found));
        assert_eq!(visits(&events), vec![0, 1, 2, 5, 8]);
        assert_eq!(e.find_path(), Ok(vec![0, 1, 2, 5, 8]));
    }

    #[test]
    fn backs_out_of_a_dead_end() {
        // S . . . .
        // . # # # .
        // . . F # .
        // . . . . .
        let walls = [6, 7, 8, 13];
        let mut e = engine(5, 4, 0, 12, &walls);
        let mut events: Vec<SearchEvent> = Vec::new();
        assert_eq!(e.greedy(&mut events), Ok(RunState::Found));
        // The top row looks closer at first and is tried before going down.
        assert_eq!(visits(&events), vec![0, 1, 2, 5, 10, 11, 12]);
        assert_eq!(e.find_path(), Ok(vec![0, 5, 10, 11, 12]));
    }

    #[test]
    fn costs_follow_first_discovery() {
        let mut e = engine(4, 1, 0, 3, &[]);
        e.greedy(&mut Vec::<SearchEvent>::new()).unwrap();
        let costs: Vec<Option<u32>> = e.cells().iter().map(|c| c.cost).collect();
        assert_eq!(costs, vec![Some(0), Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn cheaper_cost_keeps_the_first_parent() {
        let walls = [4, 5, 10, 13, 17, 19, 22, 23, 26, 27, 39, 49, 57, 63];
        let mut e = engine(8, 8, 55, 15, &walls);
        e.greedy(&mut Vec::<SearchEvent>::new()).unwrap();
        let c = &e.cells()[24];
        // Cell 24 was first reached from 16 and later got a cheaper cost
        // through another neighbor.
        assert_eq!(c.cost, Some(10));
        assert_eq!(c.parent, Some(16));
        assert_eq!(e.cells()[16].cost, Some(15));
    }
}
