//! Session lifecycle events the embedding UI subscribes to.

/// Emitted on the client's broadcast channel when something outside a normal
/// request/response cycle needs UI attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Token refresh was impossible or failed; both tokens have been cleared.
    /// The UI should route the user to the login screen.
    Expired,
}
