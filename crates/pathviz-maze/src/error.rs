use std::fmt;

/// Errors that can occur when generating a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The board has no cells along at least one axis.
    InvalidDimensions { width: i32, height: i32 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions ({width}, {height})")
            }
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = MazeError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(e.to_string(), "invalid board dimensions (0, 4)");
    }
}
