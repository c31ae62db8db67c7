use log::{debug, warn};

use crate::engine::SearchEngine;
use crate::error::SearchError;
use crate::event::{Observer, SearchEvent};
use crate::pacing::{PATH_PACING, Pacer};

impl<P: Pacer> SearchEngine<P> {
    /// Reconstruct the route of the last run, start first, finish last.
    ///
    /// Parents are followed back from the finish cell. The walk takes at most
    /// `width * height` steps; if that bound is hit the partial chain is
    /// returned as is. After a run that did not reach the finish the chain
    /// usually holds the finish cell alone.
    pub fn find_path(&self) -> Result<Vec<usize>, SearchError> {
        if !self.is_configured() {
            return Err(SearchError::NotConfigured);
        }

        let bound = self.topology.len();
        let mut path = Vec::new();
        let mut current = Some(self.finish);
        let mut steps = 0;
        while let Some(idx) = current {
            if idx == self.start {
                path.push(idx);
                break;
            }
            if steps >= bound {
                warn!("parent chain from {} exceeds {bound} steps", self.finish);
                break;
            }
            path.push(idx);
            current = self.cells[idx].parent;
            steps += 1;
        }

        path.reverse();
        Ok(path)
    }

    /// Emit the found route as [`SearchEvent::Path`] events.
    ///
    /// Every route cell except the finish is emitted in start to finish
    /// order, each followed by a [`PATH_PACING`] pause. Nothing is emitted
    /// when the last run did not find the finish. Returns the number of
    /// emitted events.
    pub fn get_path<O: Observer>(&mut self, observer: &mut O) -> Result<usize, SearchError> {
        let path = self.find_path()?;
        if !self.path_is_found() {
            return Ok(0);
        }

        let mut emitted = 0;
        for &idx in path.iter().filter(|&&idx| idx != self.finish) {
            observer.notify(SearchEvent::Path(idx));
            emitted += 1;
            self.pacer.pause(PATH_PACING)?;
        }
        debug!("emitted path of {} cells", path.len());
        Ok(emitted)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pathviz_core::Cell;
    use proptest::prelude::*;

    use crate::algorithm::Algorithm;
    use crate::engine::SearchEngine;
    use crate::engine::tests::{engine, visits};
    use crate::error::SearchError;
    use crate::event::SearchEvent;
    use crate::pacing::{NoDelay, Pacer};

    #[test]
    fn get_path_skips_the_finish() {
        let mut e = engine(3, 3, 0, 8, &[]);
        e.bfs(&mut Vec::<SearchEvent>::new()).unwrap();
        let mut events: Vec<SearchEvent> = Vec::new();
        assert_eq!(e.get_path(&mut events), Ok(4));
        assert_eq!(
            events,
            vec![
                SearchEvent::Path(0),
                SearchEvent::Path(1),
                SearchEvent::Path(2),
                SearchEvent::Path(5)
            ]
        );
    }

    #[test]
    fn get_path_twice_is_identical() {
        let mut e = engine(4, 4, 12, 3, &[5, 6]);
        e.astar(&mut Vec::<SearchEvent>::new()).unwrap();
        let mut first: Vec<SearchEvent> = Vec::new();
        let mut second: Vec<SearchEvent> = Vec::new();
        e.get_path(&mut first).unwrap();
        e.get_path(&mut second).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn nothing_to_emit_without_a_found_path() {
        let mut e = engine(3, 3, 0, 8, &[5, 7]);
        e.dfs(&mut Vec::<SearchEvent>::new()).unwrap();
        let mut events: Vec<SearchEvent> = Vec::new();
        assert_eq!(e.get_path(&mut events), Ok(0));
        assert!(events.is_empty());
        assert_eq!(e.find_path(), Ok(vec![8]));

        // Configured but never run.
        let mut e = engine(3, 3, 0, 8, &[]);
        assert_eq!(e.get_path(&mut events), Ok(0));
        assert!(events.is_empty());
    }

    #[test]
    fn start_equal_to_finish_emits_nothing() {
        let mut e = engine(2, 2, 3, 3, &[]);
        e.greedy(&mut Vec::<SearchEvent>::new()).unwrap();
        let mut events: Vec<SearchEvent> = Vec::new();
        assert_eq!(e.get_path(&mut events), Ok(0));
        assert!(events.is_empty());
    }

    #[test]
    fn corrupted_parents_are_bounded() {
        // 1 and 2 point at each other and never reach the start.
        let mut cells: Vec<Cell> = (0..4).map(Cell::new).collect();
        cells[3].parent = Some(2);
        cells[2].parent = Some(1);
        cells[1].parent = Some(2);
        let mut e = SearchEngine::with_pacer(NoDelay);
        e.configure(&cells, 0, 3, 2, 2, Duration::ZERO);
        let path = e.find_path().unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&3));
        assert!(!path.contains(&0));
    }

    #[test]
    fn cancelled_path_emission_stops() {
        struct CancelNow;
        impl Pacer for CancelNow {
            fn pause(&mut self, delay: Duration) -> Result<(), SearchError> {
                if delay.is_zero() {
                    Ok(())
                } else {
                    Err(SearchError::Cancelled)
                }
            }
        }

        let cells: Vec<Cell> = (0..9).map(Cell::new).collect();
        let mut e = SearchEngine::with_pacer(CancelNow);
        e.configure(&cells, 0, 8, 3, 3, Duration::ZERO);
        e.bfs(&mut Vec::<SearchEvent>::new()).unwrap();
        let mut events: Vec<SearchEvent> = Vec::new();
        assert_eq!(e.get_path(&mut events), Err(SearchError::Cancelled));
        assert_eq!(events, vec![SearchEvent::Path(0)]);
    }

    fn grid() -> impl Strategy<Value = (usize, usize, usize, usize, Vec<usize>)> {
        (2usize..8, 2usize..8).prop_flat_map(|(w, h)| {
            let n = w * h;
            (
                Just(w),
                Just(h),
                0..n,
                0..n,
                proptest::collection::vec(0..n, 0..n / 2),
            )
        })
    }

    proptest! {
        #[test]
        fn parents_form_a_tree_toward_the_start((w, h, s, f, walls) in grid()) {
            let walls: Vec<usize> = walls.into_iter().filter(|&i| i != s && i != f).collect();
            for alg in Algorithm::ALL {
                let mut e = engine(w, h, s, f, &walls);
                let mut events: Vec<SearchEvent> = Vec::new();
                e.run(alg, &mut events).unwrap();

                let order = visits(&events);
                let rank = |idx: usize| order.iter().position(|&v| v == idx);
                for &v in order.iter().filter(|&&v| v != s && v != f) {
                    let p = e.cells()[v].parent;
                    prop_assert!(p.is_some(), "{alg}: {v} has no parent");
                    let p = p.unwrap();
                    prop_assert!(rank(p).is_some_and(|rp| rank(v).is_some_and(|rv| rp < rv)));
                }

                if e.path_is_found() {
                    let path = e.find_path().unwrap();
                    prop_assert!(path.len() <= w * h);
                    prop_assert_eq!(path.first(), Some(&s));
                    prop_assert_eq!(path.last(), Some(&f));
                    for pair in path.windows(2) {
                        prop_assert_eq!(e.topology().distance(pair[0], pair[1]), 1);
                        prop_assert!(!e.cells()[pair[1]].is_wall);
                    }
                }
            }
        }

        #[test]
        fn astar_and_dijkstra_agree_on_length((w, h, s, f, walls) in grid()) {
            let walls: Vec<usize> = walls.into_iter().filter(|&i| i != s && i != f).collect();
            let mut a = engine(w, h, s, f, &walls);
            a.astar(&mut Vec::<SearchEvent>::new()).unwrap();
            let mut d = engine(w, h, s, f, &walls);
            d.dijkstra(&mut Vec::<SearchEvent>::new()).unwrap();
            prop_assert_eq!(a.path_is_found(), d.path_is_found());
            if a.path_is_found() {
                prop_assert_eq!(a.find_path().unwrap().len(), d.find_path().unwrap().len());
            }
        }
    }
}
