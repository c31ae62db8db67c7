use std::fmt;

/// Errors raised by [`SearchEngine`](crate::SearchEngine) entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A run or path query was issued without a valid configuration.
    NotConfigured,
    /// The requested algorithm name is not recognized.
    UnknownAlgorithm(String),
    /// The pacer's cancellation context fired during a paced run.
    Cancelled,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => f.write_str("search engine is not configured"),
            Self::UnknownAlgorithm(name) => write!(f, "no matching algorithm for \u{201c}{name}\u{201d}"),
            Self::Cancelled => f.write_str("search was cancelled"),
        }
    }
}

impl std::error::Error for SearchError {}
