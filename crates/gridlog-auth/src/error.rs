use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — sign in first")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("{0}")]
    Other(String),
}
