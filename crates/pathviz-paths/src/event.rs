//! Events emitted by a running search and the observers that receive them.

use std::sync::mpsc::Sender;

/// One step of observable search progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A cell was committed by the traversal. The finish cell is reported
    /// once more as the terminal draw of a successful run.
    Visited(usize),
    /// A cell of the reconstructed route, in start→finish order.
    Path(usize),
}

impl SearchEvent {
    /// The cell index carried by the event.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Self::Visited(i) | Self::Path(i) => i,
        }
    }
}

/// Receiver of [`SearchEvent`]s, called once per event in emission order.
pub trait Observer {
    fn notify(&mut self, event: SearchEvent);
}

impl<F: FnMut(SearchEvent)> Observer for F {
    #[inline]
    fn notify(&mut self, event: SearchEvent) {
        self(event)
    }
}

/// Records every event.
impl Observer for Vec<SearchEvent> {
    #[inline]
    fn notify(&mut self, event: SearchEvent) {
        self.push(event);
    }
}

/// Forwards events to another thread. A hung-up receiver is ignored; the run
/// still completes.
impl Observer for Sender<SearchEvent> {
    #[inline]
    fn notify(&mut self, event: SearchEvent) {
        self.send(event).ok();
    }
}
