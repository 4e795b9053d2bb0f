//! # gridlog-auth
//!
//! Session and token plumbing for the Gridlog client.
//!
//! Provides persistent token storage (OS keychain with a file fallback), the
//! in-memory [`Session`] record, the [`SessionView`] facts the navigation
//! guard consumes, and best-effort JWT expiry peeking.

pub mod error;
pub mod expiry;
pub mod session;
pub mod token_store;

pub use error::AuthError;
pub use session::{Session, SessionView};
pub use token_store::{TokenKind, TokenStore};
