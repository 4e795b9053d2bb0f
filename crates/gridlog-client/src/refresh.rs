//! Single-flight coordination for token refresh.
//!
//! At most one refresh call is in flight per client instance. The first
//! request to hit a 401 becomes the leader and performs the refresh; requests
//! that hit 401 while it is pending enqueue as followers and are woken with
//! the outcome. The gate is owned by the client instance — there is no
//! process-wide refresh state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::sync::oneshot;

/// The refresh attempt settled without producing a new access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token refresh failed")]
pub struct RefreshFailed;

/// Outcome delivered to every follower: the new access token, or failure.
pub type RefreshOutcome = Result<String, RefreshFailed>;

#[derive(Debug, Default)]
struct GateState {
    refreshing: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// What a 401-handling request was assigned by the gate.
#[derive(Debug)]
pub enum RefreshTicket {
    /// The flag was clear; this request runs the refresh and must call
    /// [`RefreshGate::settle`] exactly once, on success and on failure.
    Leader,
    /// A refresh is already pending; await the outcome.
    Follower(oneshot::Receiver<RefreshOutcome>),
}

#[derive(Debug, Default)]
pub struct RefreshGate {
    state: Mutex<GateState>,
}

impl RefreshGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the current refresh cycle, opening one if none is pending.
    #[must_use]
    pub fn join(&self) -> RefreshTicket {
        let mut state = self.state_guard();
        if state.refreshing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            RefreshTicket::Follower(rx)
        } else {
            state.refreshing = true;
            RefreshTicket::Leader
        }
    }

    /// Settle the pending cycle: clear the flag unconditionally and wake every
    /// follower with the outcome. Followers that gave up are skipped.
    pub fn settle(&self, outcome: &RefreshOutcome) {
        let waiters = {
            let mut state = self.state_guard();
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state_guard().refreshing
    }

    fn state_guard(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn first_join_leads_rest_follow() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        assert!(gate.is_refreshing());
        assert!(matches!(gate.join(), RefreshTicket::Follower(_)));
        assert!(matches!(gate.join(), RefreshTicket::Follower(_)));
    }

    #[tokio::test]
    async fn settle_wakes_all_followers_with_outcome() {
        let gate = RefreshGate::new();
        let RefreshTicket::Leader = gate.join() else {
            panic!("expected leader");
        };
        let RefreshTicket::Follower(rx1) = gate.join() else {
            panic!("expected follower");
        };
        let RefreshTicket::Follower(rx2) = gate.join() else {
            panic!("expected follower");
        };

        gate.settle(&Ok("fresh_token".to_string()));

        assert_eq!(rx1.await.unwrap(), Ok("fresh_token".to_string()));
        assert_eq!(rx2.await.unwrap(), Ok("fresh_token".to_string()));
        assert!(!gate.is_refreshing());
    }

    #[tokio::test]
    async fn settle_failure_rejects_followers() {
        let gate = RefreshGate::new();
        let RefreshTicket::Leader = gate.join() else {
            panic!("expected leader");
        };
        let RefreshTicket::Follower(rx) = gate.join() else {
            panic!("expected follower");
        };

        gate.settle(&Err(RefreshFailed));
        assert_eq!(rx.await.unwrap(), Err(RefreshFailed));
    }

    #[tokio::test]
    async fn next_cycle_opens_after_settle() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        gate.settle(&Err(RefreshFailed));
        // Flag cleared unconditionally, so a later 401 can refresh again.
        assert!(matches!(gate.join(), RefreshTicket::Leader));
    }

    #[tokio::test]
    async fn dropped_follower_does_not_block_settle() {
        let gate = RefreshGate::new();
        assert!(matches!(gate.join(), RefreshTicket::Leader));
        let ticket = gate.join();
        drop(ticket);
        gate.settle(&Ok("tok".to_string()));
        assert!(!gate.is_refreshing());
    }
}
