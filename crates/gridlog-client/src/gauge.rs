//! Reference-counted global loading indicator.
//!
//! Every in-flight request holds a [`LoadingPermit`]; the active count is the
//! number of live permits. Release is tied to `Drop`, so the count returns to
//! zero on every path — success, error, and cancellation alike. A UI shows
//! its spinner while the observed count is non-zero.

use tokio::sync::watch;

/// Shared counter of in-flight requests.
#[derive(Debug, Clone)]
pub struct LoadingGauge {
    tx: watch::Sender<usize>,
}

impl LoadingGauge {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(0),
        }
    }

    /// Count one request in. The permit counts it back out when dropped.
    #[must_use]
    pub fn acquire(&self) -> LoadingPermit {
        self.tx.send_modify(|active| *active += 1);
        LoadingPermit {
            tx: self.tx.clone(),
        }
    }

    /// Requests currently in flight.
    #[must_use]
    pub fn active(&self) -> usize {
        *self.tx.borrow()
    }

    /// Watch the active count; receivers are notified on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.tx.subscribe()
    }
}

impl Default for LoadingGauge {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle for one in-flight request.
#[derive(Debug)]
pub struct LoadingPermit {
    tx: watch::Sender<usize>,
}

impl Drop for LoadingPermit {
    fn drop(&mut self) {
        self.tx.send_modify(|active| *active = active.saturating_sub(1));
    }
}
