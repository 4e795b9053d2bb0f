//! Persistent storage for the two session token strings.
//!
//! Tokens live under fixed keys (`access_token`, `refresh_token`) so a
//! restarted app can resume its session. Primary tier is the OS keychain;
//! if the keyring is unavailable the tokens fall back to files under the
//! credentials directory (dir 0700, files 0600 on Unix).
//!
//! Storage is authoritative at boot: stores read it once when they are
//! constructed, and every write (login, refresh) goes back through here.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "gridlog";
const CREDENTIALS_DIR_NAME: &str = ".gridlog";

/// The two token slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Fixed storage key, shared by the keyring entry and the file name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }
}

/// Handle to the token storage tiers.
#[derive(Debug, Clone)]
pub struct TokenStore {
    /// Keyring service name; `None` disables the keyring tier entirely
    /// (used by tests and headless environments).
    service: Option<String>,
    dir: PathBuf,
}

impl TokenStore {
    /// Store rooted at `~/.gridlog/` with the OS keyring as the primary tier.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the home directory cannot be
    /// resolved.
    pub fn open_default() -> Result<Self, AuthError> {
        let dir = dirs::home_dir()
            .map(|h| h.join(CREDENTIALS_DIR_NAME))
            .ok_or_else(|| {
                AuthError::TokenStoreError(
                    "home directory not found; cannot store credentials".into(),
                )
            })?;
        Ok(Self {
            service: Some(DEFAULT_KEYRING_SERVICE.to_string()),
            dir,
        })
    }

    /// File-only store rooted at `dir`. No keyring tier.
    #[must_use]
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            service: None,
            dir: dir.into(),
        }
    }

    /// Persist a token. Falls back to a file if the keyring tier fails.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both tiers fail.
    pub fn store(&self, kind: TokenKind, token: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry(kind) {
            match entry.set_password(token) {
                Ok(()) => return Ok(()),
                Err(error) => {
                    tracing::warn!(%error, key = kind.key(), "keyring store failed; falling back to file");
                }
            }
        }
        self.store_file(kind, token)
    }

    /// Load a token. Priority: keyring, then file. Empty values count as absent.
    #[must_use]
    pub fn load(&self, kind: TokenKind) -> Option<String> {
        if let Some(entry) = self.keyring_entry(kind)
            && let Ok(token) = entry.get_password()
            && !token.is_empty()
        {
            return Some(token);
        }
        self.load_file(kind)
    }

    /// Remove both tokens from every tier. Missing entries are not errors.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if an existing credentials file
    /// cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        for kind in [TokenKind::Access, TokenKind::Refresh] {
            if let Some(entry) = self.keyring_entry(kind) {
                let _ = entry.delete_credential();
            }
            let path = self.file_path(kind);
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }

    // --- Private tier helpers ---

    fn keyring_entry(&self, kind: TokenKind) -> Option<keyring::Entry> {
        let service = self.service.as_deref()?;
        match keyring::Entry::new(service, kind.key()) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                None
            }
        }
    }

    fn file_path(&self, kind: TokenKind) -> PathBuf {
        self.dir.join(kind.key())
    }

    fn store_file(&self, kind: TokenKind, token: &str) -> Result<(), AuthError> {
        ensure_private_dir(&self.dir)?;
        let path = self.file_path(kind);
        fs::write(&path, token)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }

    fn load_file(&self, kind: TokenKind) -> Option<String> {
        fs::read_to_string(self.file_path(kind))
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

fn ensure_private_dir(dir: &Path) -> Result<(), AuthError> {
    fs::create_dir_all(dir)
        .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", dir.display())))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(e) = fs::set_permissions(dir, fs::Permissions::from_mode(0o700)) {
            tracing::warn!("failed to chmod 0700 {}: {e}", dir.display());
        }
    }
    Ok(())
}
