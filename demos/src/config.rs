use clap::{Parser, ValueEnum};
use pathviz_maze::{MazeType, Orientation};
use pathviz_paths::{Algorithm, SearchSpeed};

/// Wall layout applied to the board before the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// No walls.
    Open,
    /// Randomly scattered walls.
    Random,
    /// A recursive-division maze.
    Recursive,
}

impl Layout {
    pub fn maze_type(self) -> Option<MazeType> {
        match self {
            Self::Open => None,
            Self::Random => Some(MazeType::Random),
            Self::Recursive => Some(MazeType::RecursiveDivision),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Animate grid searches in the terminal", long_about = None)]
pub struct Config {
    /// bfs, dfs, dijkstra, greedy or astar.
    #[arg(long, default_value = "astar")]
    pub algorithm: Algorithm,

    #[arg(long, value_enum, default_value_t = Layout::Recursive)]
    pub maze: Layout,

    /// Direction of the first dividing wall of a recursive maze.
    #[arg(long, default_value = "horizontal", value_parser = parse_orientation)]
    pub orientation: Orientation,

    #[arg(long, default_value_t = 41)]
    pub width: i32,

    #[arg(long, default_value_t = 21)]
    pub height: i32,

    /// Pause after each visited cell: fast, moderate or slow.
    #[arg(long, default_value = "fast", value_parser = parse_speed)]
    pub speed: SearchSpeed,

    /// Seed for a reproducible wall layout.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell index. Defaults to the second cell of the middle row.
    #[arg(long)]
    pub start: Option<usize>,

    /// Finish cell index. Defaults to the second to last cell of the middle
    /// row.
    #[arg(long)]
    pub finish: Option<usize>,

    /// Skip the terminal animation and only print the summary.
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}

impl Config {
    /// Start and finish indices, falling back to the middle row.
    pub fn markers(&self) -> (usize, usize) {
        let w = self.width.max(1) as usize;
        let row = (self.height.max(1) as usize) / 2;
        let start = self.start.unwrap_or(row * w + usize::from(w > 1));
        let finish = self.finish.unwrap_or(row * w + w.saturating_sub(2));
        (start, finish)
    }
}

fn parse_orientation(s: &str) -> Result<Orientation, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "horizontal" | "h" => Ok(Orientation::Horizontal),
        "vertical" | "v" => Ok(Orientation::Vertical),
        other => Err(format!("unknown orientation \u{201c}{other}\u{201d}")),
    }
}

fn parse_speed(s: &str) -> Result<SearchSpeed, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "fast" => Ok(SearchSpeed::Fast),
        "moderate" | "medium" => Ok(SearchSpeed::Moderate),
        "slow" => Ok(SearchSpeed::Slow),
        other => Err(format!("unknown speed \u{201c}{other}\u{201d}")),
    }
}
