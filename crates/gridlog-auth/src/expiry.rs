//! Best-effort JWT expiry peeking.

use base64::Engine as _;

use crate::error::AuthError;

/// Decode a JWT's `exp` claim without signature verification.
///
/// This is a best-effort check for deciding whether a stored access token is
/// worth sending at all; the backend remains the authority and will answer
/// 401 for anything actually invalid.
///
/// # Errors
///
/// Returns `AuthError::Other` if the JWT format is invalid or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Other("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// Whether a token is already expired (or malformed, which we treat the same).
#[must_use]
pub fn is_expired(jwt: &str) -> bool {
    decode_expiry(jwt).map_or(true, |exp| exp <= chrono::Utc::now())
}
