//! # gridlog-client
//!
//! The shared HTTP client for the Gridlog backend API.
//!
//! Every outgoing call is annotated with `Authorization: Bearer <token>` when
//! a token is stored, holds a reference-counted loading permit for its whole
//! lifetime, and is replayed once after a coordinated token refresh when the
//! backend answers 401. Refresh attempts are single-flight per client
//! instance: concurrent 401s queue on the [`refresh::RefreshGate`] and are
//! woken with the shared outcome.

pub mod client;
pub mod error;
pub mod events;
pub mod gauge;
pub mod refresh;

pub use client::ApiClient;
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use events::SessionEvent;
pub use gauge::{LoadingGauge, LoadingPermit};
pub use refresh::{RefreshFailed, RefreshGate, RefreshTicket};
