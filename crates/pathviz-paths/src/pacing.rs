//! Pacing of emitted events.
//!
//! A search pauses after each committed cell and each path cell so that a
//! front end can animate the progress. The pause itself is delegated to a
//! [`Pacer`], which makes the delay a scheduling contract rather than a
//! hard-wired timer: [`SleepPacer`] blocks the current thread and honours a
//! cancellation [`Context`], [`NoDelay`] returns immediately.

use std::thread;
use std::time::Duration;

use pathviz_core::Context;

use crate::error::SearchError;

/// Fixed pause between two emitted path cells.
pub const PATH_PACING: Duration = Duration::from_millis(100);

/// Longest single sleep of a [`SleepPacer`] before the context is checked
/// again.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

/// Preset pacing intervals for visited-cell emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchSpeed {
    #[default]
    Fast,
    Moderate,
    Slow,
}

impl SearchSpeed {
    /// The pause after each visited cell.
    pub const fn delay(self) -> Duration {
        match self {
            Self::Fast => Duration::from_millis(1),
            Self::Moderate => Duration::from_millis(100),
            Self::Slow => Duration::from_millis(200),
        }
    }
}

/// Performs the pause between two emitted events.
pub trait Pacer {
    /// Wait for `delay`. Returns [`SearchError::Cancelled`] when the run
    /// should stop instead of continuing.
    fn pause(&mut self, delay: Duration) -> Result<(), SearchError>;
}

/// Sleeps on the calling thread, checking a cancellation [`Context`].
#[derive(Debug, Clone, Default)]
pub struct SleepPacer {
    ctx: Context,
}

impl SleepPacer {
    /// A pacer that can only be stopped through [`context`](Self::context).
    pub fn new() -> Self {
        Self::default()
    }

    /// A pacer observing an existing cancellation token.
    pub fn with_context(ctx: Context) -> Self {
        Self { ctx }
    }

    /// The cancellation token checked between sleeps.
    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) -> Result<(), SearchError> {
        let mut remaining = delay;
        loop {
            if self.ctx.is_done() {
                return Err(SearchError::Cancelled);
            }
            if remaining.is_zero() {
                return Ok(());
            }
            let step = remaining.min(SLEEP_SLICE);
            thread::sleep(step);
            remaining -= step;
        }
    }
}

/// Zero-delay pacer, for tests and batch runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    #[inline]
    fn pause(&mut self, _delay: Duration) -> Result<(), SearchError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn speed_presets() {
        assert_eq!(SearchSpeed::Fast.delay(), Duration::from_millis(1));
        assert_eq!(SearchSpeed::Moderate.delay(), Duration::from_millis(100));
        assert_eq!(SearchSpeed::Slow.delay(), Duration::from_millis(200));
        assert_eq!(SearchSpeed::default(), SearchSpeed::Fast);
    }

    #[test]
    fn sleep_pacer_waits() {
        let mut pacer = SleepPacer::new();
        let t = Instant::now();
        pacer.pause(Duration::from_millis(15)).unwrap();
        assert!(t.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn sleep_pacer_cancelled() {
        let ctx = Context::new();
        let mut pacer = SleepPacer::with_context(ctx.clone());
        assert_eq!(pacer.pause(Duration::ZERO), Ok(()));
        ctx.cancel();
        assert_eq!(pacer.pause(Duration::from_secs(60)), Err(SearchError::Cancelled));
    }

    #[test]
    fn no_delay_never_fails() {
        assert_eq!(NoDelay.pause(Duration::from_secs(3600)), Ok(()));
    }
}
