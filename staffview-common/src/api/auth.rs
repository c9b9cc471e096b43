//! Request authentication via timestamp and hash validation
//!
//! Session handling proper is an external concern; this module supplies the
//! gate primitive the service applies at its boundary. A request carries a
//! Unix-epoch-millisecond timestamp and a SHA-256 hash of
//! `timestamp:path:secret`; the service validates freshness, then the hash.
//! A shared secret of 0 disables all checking.
//!
//! Pure functions only. No HTTP framework dependencies here; the middleware
//! that reads headers lives in the service crate.

use sha2::{Digest, Sha256};

/// Maximum accepted timestamp age (milliseconds in the past)
pub const MAX_TIMESTAMP_AGE_MS: i64 = 30_000;

/// Maximum accepted clock skew (milliseconds in the future)
pub const MAX_TIMESTAMP_SKEW_MS: i64 = 1_000;

/// Authentication validation failures
#[derive(Debug, Clone)]
pub enum AuthError {
    /// Timestamp outside the acceptable window
    InvalidTimestamp {
        timestamp: i64,
        now: i64,
        reason: String,
    },

    /// Hash does not match the calculated value
    InvalidHash { provided: String, calculated: String },

    /// Required auth header missing or unreadable
    MissingHeader(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidTimestamp { reason, .. } => {
                write!(f, "Invalid timestamp: {}", reason)
            }
            AuthError::InvalidHash { .. } => write!(f, "Invalid hash"),
            AuthError::MissingHeader(name) => write!(f, "Missing header: {}", name),
        }
    }
}

impl std::error::Error for AuthError {}

/// Calculate the request hash for a timestamp/path pair under a secret.
///
/// Lowercase hex of SHA-256 over `timestamp:path:secret`.
pub fn compute_hash(timestamp: i64, path: &str, secret: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}:{}", timestamp, path, secret).as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Validate timestamp freshness against `now` (both epoch milliseconds).
pub fn validate_timestamp(timestamp: i64, now: i64) -> Result<(), AuthError> {
    let age = now - timestamp;
    if age > MAX_TIMESTAMP_AGE_MS {
        return Err(AuthError::InvalidTimestamp {
            timestamp,
            now,
            reason: format!("{}ms old, limit {}ms", age, MAX_TIMESTAMP_AGE_MS),
        });
    }
    if age < -MAX_TIMESTAMP_SKEW_MS {
        return Err(AuthError::InvalidTimestamp {
            timestamp,
            now,
            reason: format!("{}ms in the future, limit {}ms", -age, MAX_TIMESTAMP_SKEW_MS),
        });
    }
    Ok(())
}

/// Validate a provided hash against the calculated one.
pub fn validate_hash(
    provided: &str,
    timestamp: i64,
    path: &str,
    secret: i64,
) -> Result<(), AuthError> {
    let calculated = compute_hash(timestamp, path, secret);
    if provided != calculated {
        return Err(AuthError::InvalidHash {
            provided: provided.to_string(),
            calculated,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_hex_shaped() {
        let a = compute_hash(1_730_000_000_000, "/api/employees", 42);
        let b = compute_hash(1_730_000_000_000, "/api/employees", 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hash_depends_on_every_input() {
        let base = compute_hash(1000, "/api/employees", 42);
        assert_ne!(base, compute_hash(1001, "/api/employees", 42));
        assert_ne!(base, compute_hash(1000, "/api/bookmarks", 42));
        assert_ne!(base, compute_hash(1000, "/api/employees", 43));
    }

    #[test]
    fn fresh_timestamp_validates() {
        assert!(validate_timestamp(10_000, 10_500).is_ok());
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let result = validate_timestamp(0, MAX_TIMESTAMP_AGE_MS + 1);
        assert!(result.is_err());
    }

    #[test]
    fn future_timestamp_beyond_skew_is_rejected() {
        let result = validate_timestamp(MAX_TIMESTAMP_SKEW_MS + 10, 0);
        assert!(result.is_err());
    }

    #[test]
    fn matching_hash_validates() {
        let hash = compute_hash(5_000, "/api/stats/overview", 7);
        assert!(validate_hash(&hash, 5_000, "/api/stats/overview", 7).is_ok());
        assert!(validate_hash(&hash, 5_000, "/api/stats/overview", 8).is_err());
    }
}
