//! Wiring of board, maze, engine and terminal for one visualized search.

use std::error::Error;
use std::fmt;
use std::io::{self, Stdout};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use log::debug;
use pathviz_core::{Board, Context};
use pathviz_maze::MazeGenerator;
use pathviz_paths::{
    Algorithm, NoDelay, Observer, Pacer, RunState, SearchEngine, SearchError, SearchEvent,
    SleepPacer,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::config::Config;
use crate::render::TermView;

/// Outcome of one search, printed when the program ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub state: RunState,
    /// Cells committed by the traversal.
    pub visited: usize,
    /// The route from start to finish; empty unless found.
    pub path: Vec<usize>,
    pub walls: usize,
    /// Seed of the wall layout, if one was generated.
    pub seed: Option<u64>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:?} after {} visited cells, {} walls",
            self.algorithm, self.state, self.visited, self.walls
        )?;
        if !self.path.is_empty() {
            write!(f, ", path of {} cells", self.path.len())?;
        }
        if let Some(seed) = self.seed {
            write!(f, " (seed {seed})")?;
        }
        Ok(())
    }
}

/// Build the board described by `config` and lay out its walls.
///
/// Returns the seed used for the layout so that it can be reproduced.
pub fn build_board(config: &Config) -> Result<(Board, Option<u64>), Box<dyn Error>> {
    let (start, finish) = config.markers();
    let mut board = Board::new(config.width, config.height, start, finish)?;
    let Some(kind) = config.maze.maze_type() else {
        return Ok((board, None));
    };

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut mg = MazeGenerator::new(StdRng::seed_from_u64(seed));
    let walls = mg.generate(
        config.width,
        config.height,
        &[start, finish],
        kind,
        config.orientation,
    )?;
    let added = board.set_walls(&walls);
    debug!("{kind:?} layout with seed {seed}: {added} walls");
    Ok((board, Some(seed)))
}

/// Run the configured search, animated in the terminal unless
/// `config.headless` is set.
pub fn run(config: &Config) -> Result<Summary, Box<dyn Error>> {
    let (board, seed) = build_board(config)?;

    if config.headless {
        let mut engine = SearchEngine::with_pacer(NoDelay);
        let mut events: Vec<SearchEvent> = Vec::new();
        let state = search(&mut engine, &board, config, &mut events)?;
        debug!("headless run emitted {} events", events.len());
        return Ok(summarize(&engine, &board, config, state, seed));
    }

    let cancel = Context::new();
    let mut engine = SearchEngine::with_pacer(SleepPacer::with_context(cancel.clone()));
    let session = TerminalSession::enter()?;
    let mut view = TermView::new(io::stdout(), &board);
    view.draw_board(&board)?;
    view.status(&format!("{} - q to stop", config.algorithm))?;

    let stop = Context::new();
    let watcher = watch_keys(cancel, stop.clone());
    let state = search(&mut engine, &board, config, &mut view);
    stop.cancel();
    watcher.join().ok();
    let state = state?;
    if let Some(e) = view.take_error() {
        return Err(e.into());
    }

    let summary = summarize(&engine, &board, config, state, seed);
    view.status(&format!("{summary} - press any key"))?;
    wait_for_key()?;
    drop(session);
    Ok(summary)
}

/// Configure `engine` from `board` and run the search, then replay the path
/// when one was found. Cancellation ends the run without an error.
fn search<P: Pacer, O: Observer>(
    engine: &mut SearchEngine<P>,
    board: &Board,
    config: &Config,
    observer: &mut O,
) -> Result<RunState, SearchError> {
    engine.configure_board(board, config.speed.delay());
    let state = match engine.run(config.algorithm, observer) {
        Err(SearchError::Cancelled) => return Ok(RunState::Cancelled),
        other => other?,
    };
    if state == RunState::Found {
        match engine.get_path(observer) {
            Ok(_) | Err(SearchError::Cancelled) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(state)
}

fn summarize<P: Pacer>(
    engine: &SearchEngine<P>,
    board: &Board,
    config: &Config,
    state: RunState,
    seed: Option<u64>,
) -> Summary {
    let path = if engine.path_is_found() {
        engine.find_path().unwrap_or_default()
    } else {
        Vec::new()
    };
    Summary {
        algorithm: config.algorithm,
        state,
        visited: engine.cells().iter().filter(|c| c.is_visited).count(),
        path,
        walls: board.walls().count(),
        seed,
    }
}

/// Raw mode and alternate screen for the lifetime of the value.
struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Cancel `cancel` when a quit key is pressed. The thread ends once `stop`
/// is cancelled.
fn watch_keys(cancel: Context, stop: Context) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.is_done() {
            match event::poll(Duration::from_millis(50)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if is_quit(key) => {
                        cancel.cancel();
                        return;
                    }
                    Ok(_) => {}
                    Err(_) => return,
                },
                Ok(false) => {}
                Err(_) => return,
            }
        }
    })
}

fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
