//! Crossterm drawing of a board and of search events.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use pathviz_core::Board;
use pathviz_paths::{Observer, SearchEvent};

/// Terminal rows above the board, used for the status line.
const HEADER_ROWS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Open,
    Wall,
    Start,
    Finish,
    Visited,
    Path,
}

impl Glyph {
    fn ch(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Finish => 'F',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Open => Color::DarkGrey,
            Self::Wall => Color::Grey,
            Self::Start => Color::Green,
            Self::Finish => Color::Red,
            Self::Visited => Color::Cyan,
            Self::Path => Color::Yellow,
        }
    }
}

/// Draws a board one character per cell and repaints cells as search events
/// arrive.
///
/// The start and finish markers keep their glyphs. Write errors raised while
/// acting as an [`Observer`] are kept and can be collected with
/// [`take_error`](Self::take_error).
pub struct TermView<W: Write> {
    out: W,
    width: usize,
    start: usize,
    finish: usize,
    visited: usize,
    path: usize,
    error: Option<io::Error>,
}

impl<W: Write> TermView<W> {
    pub fn new(out: W, board: &Board) -> Self {
        Self {
            out,
            width: board.width(),
            start: board.start(),
            finish: board.finish(),
            visited: 0,
            path: 0,
            error: None,
        }
    }

    /// Draw every cell of `board`.
    pub fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        for cell in board.cells() {
            let glyph = if cell.is_start {
                Glyph::Start
            } else if cell.is_finish {
                Glyph::Finish
            } else if cell.is_wall {
                Glyph::Wall
            } else {
                Glyph::Open
            };
            self.put(cell.index, glyph)?;
        }
        self.out.flush()
    }

    /// Replace the status line.
    pub fn status(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        self.out.flush()
    }

    /// Repaint the cell of one event.
    pub fn paint(&mut self, event: SearchEvent) -> io::Result<()> {
        let (idx, glyph) = match event {
            SearchEvent::Visited(i) => {
                self.visited += 1;
                (i, Glyph::Visited)
            }
            SearchEvent::Path(i) => {
                self.path += 1;
                (i, Glyph::Path)
            }
        };
        if idx == self.start || idx == self.finish {
            return Ok(());
        }
        self.put(idx, glyph)?;
        self.out.flush()
    }

    /// Number of visited events painted so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Number of path events painted so far.
    pub fn path_len(&self) -> usize {
        self.path
    }

    /// The first write error hit while observing, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn put(&mut self, idx: usize, glyph: Glyph) -> io::Result<()> {
        let x = u16::try_from(idx % self.width).ok();
        let y = u16::try_from(idx / self.width)
            .ok()
            .and_then(|y| y.checked_add(HEADER_ROWS));
        let (Some(x), Some(y)) = (x, y) else {
            return Err(io::Error::other(format!(
                "cell {idx} is outside terminal coordinates"
            )));
        };
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetForegroundColor(glyph.color()),
            Print(glyph.ch()),
            ResetColor
        )
    }
}

impl<W: Write> Observer for TermView<W> {
    fn notify(&mut self, event: SearchEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.paint(event) {
            self.error = Some(e);
        }
    }
}
