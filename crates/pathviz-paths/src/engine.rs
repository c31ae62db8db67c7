use std::time::Duration;

use log::{debug, trace, warn};
use pathviz_core::{Board, Cell};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::event::{Observer, SearchEvent};
use crate::neighbors::GridTopology;
use crate::pacing::{Pacer, SleepPacer};

/// Lifecycle of a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// Configured (or not yet), no run started.
    #[default]
    Idle,
    /// A traversal is in progress.
    Running,
    /// The finish cell was drawn from the frontier.
    Found,
    /// The frontier emptied before reaching the finish cell.
    Exhausted,
    /// The pacer's cancellation context fired mid-run.
    Cancelled,
}

impl RunState {
    /// Whether a run ended here.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted | Self::Cancelled)
    }
}

/// What happened to a candidate taken off the frontier.
pub(crate) enum Draw {
    /// It is the finish cell; the run ends.
    Finish,
    /// It was already visited.
    Skip,
    /// It was marked visited and emitted; explore its neighbors next.
    Commit,
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Runs one traversal at a time over a configured grid and reports progress
/// through an [`Observer`].
///
/// The engine owns a private copy of the cells taken at
/// [`configure`](Self::configure). Each algorithm marks cells visited, assigns
/// parents and (for the weighted ones) costs on that copy; the copy is not
/// reset between runs, so callers configure again before re-running.
///
/// ```
/// use pathviz_core::Board;
/// use pathviz_paths::{NoDelay, RunState, SearchEngine, SearchEvent};
///
/// let board = Board::new(3, 3, 0, 8).unwrap();
/// let mut engine = SearchEngine::with_pacer(NoDelay);
/// engine.configure_board(&board, std::time::Duration::ZERO);
///
/// let mut events: Vec<SearchEvent> = Vec::new();
/// assert_eq!(engine.bfs(&mut events).unwrap(), RunState::Found);
/// assert_eq!(engine.find_path().unwrap(), vec![0, 1, 2, 5, 8]);
/// ```
pub struct SearchEngine<P = SleepPacer> {
    pub(crate) cells: Vec<Cell>,
    pub(crate) start: usize,
    pub(crate) finish: usize,
    pub(crate) topology: GridTopology,
    pub(crate) pacing: Duration,
    pub(crate) pacer: P,
    configured: bool,
    state: RunState,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<usize>,
}

impl SearchEngine<SleepPacer> {
    /// An unconfigured engine that paces by sleeping on the calling thread.
    pub fn new() -> Self {
        Self::with_pacer(SleepPacer::new())
    }
}

impl Default for SearchEngine<SleepPacer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pacer> SearchEngine<P> {
    /// An unconfigured engine using `pacer` for its pauses.
    pub fn with_pacer(pacer: P) -> Self {
        Self {
            cells: Vec::new(),
            start: 0,
            finish: 0,
            topology: GridTopology::new(0, 0),
            pacing: Duration::ZERO,
            pacer,
            configured: false,
            state: RunState::Idle,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Take a copy of `cells` and the run parameters.
    ///
    /// The configuration is valid when there are at least two cells, both
    /// dimensions are positive, `cells.len() == width * height`, and both
    /// indices address a cell. An invalid configuration is not reported here;
    /// the next run or path query fails with [`SearchError::NotConfigured`].
    pub fn configure(
        &mut self,
        cells: &[Cell],
        start: usize,
        finish: usize,
        width: usize,
        height: usize,
        pacing: Duration,
    ) {
        self.cells = cells.to_vec();
        self.start = start;
        self.finish = finish;
        self.topology = GridTopology::new(width, height);
        self.pacing = pacing;
        self.state = RunState::Idle;

        let len = cells.len();
        self.configured = len >= 2
            && width > 0
            && height > 0
            && width.checked_mul(height) == Some(len)
            && start < len
            && finish < len;

        if !self.configured {
            warn!(
                "rejected search configuration: {len} cells, {width}x{height}, start {start}, finish {finish}"
            );
        }
    }

    /// Configure from a board's cells, markers, and dimensions.
    pub fn configure_board(&mut self, board: &Board, pacing: Duration) {
        self.configure(
            board.cells(),
            board.start(),
            board.finish(),
            board.width(),
            board.height(),
            pacing,
        );
    }

    /// Whether the last [`configure`](Self::configure) call was valid.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Whether the last run reached the finish cell.
    #[inline]
    pub fn path_is_found(&self) -> bool {
        self.state == RunState::Found
    }

    /// The engine's copy of the cells, with the bookkeeping of the last run.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> usize {
        self.finish
    }

    #[inline]
    pub fn topology(&self) -> GridTopology {
        self.topology
    }

    /// Run `algorithm` to completion.
    pub fn run<O: Observer>(
        &mut self,
        algorithm: Algorithm,
        observer: &mut O,
    ) -> Result<RunState, SearchError> {
        match algorithm {
            Algorithm::Bfs => self.bfs(observer),
            Algorithm::Dfs => self.dfs(observer),
            Algorithm::Dijkstra => self.dijkstra(observer),
            Algorithm::Greedy => self.greedy(observer),
            Algorithm::AStar => self.astar(observer),
        }
    }

    /// Run the algorithm called `name` (see [`Algorithm`]'s `FromStr`).
    pub fn run_named<O: Observer>(
        &mut self,
        name: &str,
        observer: &mut O,
    ) -> Result<RunState, SearchError> {
        let algorithm: Algorithm = name.parse()?;
        self.run(algorithm, observer)
    }

    // -----------------------------------------------------------------------
    // Shared traversal skeleton
    // -----------------------------------------------------------------------

    /// Fail unless configured and enter [`RunState::Running`].
    pub(crate) fn begin(&mut self, algorithm: Algorithm) -> Result<(), SearchError> {
        if !self.configured {
            return Err(SearchError::NotConfigured);
        }
        debug!(
            "{algorithm} search from {} to {} on {}x{}",
            self.start,
            self.finish,
            self.topology.width(),
            self.topology.height()
        );
        self.state = RunState::Running;
        Ok(())
    }

    /// Settle the terminal state from a traversal loop's outcome.
    pub(crate) fn end(
        &mut self,
        algorithm: Algorithm,
        outcome: Result<bool, SearchError>,
    ) -> Result<RunState, SearchError> {
        self.state = match outcome {
            Ok(true) => RunState::Found,
            Ok(false) => RunState::Exhausted,
            Err(e) => {
                debug!("{algorithm} search interrupted: {e}");
                self.state = RunState::Cancelled;
                return Err(e);
            }
        };
        let visited = self.cells.iter().filter(|c| c.is_visited).count();
        debug!("{algorithm} search ended {:?} after {visited} visits", self.state);
        Ok(self.state)
    }

    /// Handle one candidate drawn from the frontier.
    ///
    /// The finish test comes before the visited test: the finish cell is
    /// emitted as the terminal draw without being marked visited. Otherwise an
    /// unvisited cell is marked, emitted, and followed by the pacing pause.
    pub(crate) fn draw<O: Observer>(
        &mut self,
        idx: usize,
        observer: &mut O,
    ) -> Result<Draw, SearchError> {
        if idx == self.finish {
            observer.notify(SearchEvent::Visited(idx));
            return Ok(Draw::Finish);
        }
        if self.cells[idx].is_visited {
            return Ok(Draw::Skip);
        }
        self.cells[idx].is_visited = true;
        trace!("visit {idx}");
        observer.notify(SearchEvent::Visited(idx));
        self.pacer.pause(self.pacing)?;
        Ok(Draw::Commit)
    }

    /// Fill the scratch buffer with the traversable neighbors of `idx`.
    ///
    /// The buffer is moved out so the caller can mutate cells while walking
    /// it; hand it back with [`restore_neighbors`](Self::restore_neighbors).
    pub(crate) fn take_neighbors(&mut self, idx: usize) -> Vec<usize> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        self.topology.neighbors(idx, &self.cells, &mut nbuf);
        nbuf
    }

    pub(crate) fn restore_neighbors(&mut self, nbuf: Vec<usize>) {
        self.nbuf = nbuf;
    }

    /// Cost relaxation shared by Dijkstra and greedy search.
    ///
    /// The cost is lowered to `current cost + 1` when that is cheaper, but the
    /// parent is only written the first time the neighbor gets a cost.
    /// Returns `Some(new cost)` when the cost changed.
    pub(crate) fn relax_first_parent(&mut self, current: usize, neighbor: usize) -> Option<u32> {
        let tentative = self.cells[current].cost.unwrap_or(0) + 1;
        let n = &mut self.cells[neighbor];
        match n.cost {
            None => {
                n.cost = Some(tentative);
                if neighbor != self.start {
                    n.parent = Some(current);
                }
                Some(tentative)
            }
            Some(c) if tentative < c => {
                n.cost = Some(tentative);
                Some(tentative)
            }
            Some(_) => None,
        }
    }

    /// Reset the start cell for a weighted run.
    pub(crate) fn seed_start_cost(&mut self) {
        let s = &mut self.cells[self.start];
        s.cost = Some(0);
        s.parent = None;
    }
}
