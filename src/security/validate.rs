//! Input Validation Module
//!
//! Validates caller-supplied cache keys before they reach the store.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CacheError, Result};

/// Maximum allowed key length in bytes.
pub const MAX_KEY_LENGTH: usize = 256;

/// Keys are namespace-style identifiers: alphanumerics plus the
/// separators used by key derivation (`:`, `_`, `.`, `-`).
static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9:_.\-]+$").expect("key pattern is valid"));

// == Validate Key ==
/// Checks that a key is non-empty, within the length limit, and drawn
/// from the allowed charset.
///
/// # Errors
/// `InvalidArgument` describing the first violated rule.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidArgument(
            "Key cannot be empty".to_string(),
        ));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidArgument(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    if !KEY_PATTERN.is_match(key) {
        return Err(CacheError::InvalidArgument(
            "Key may only contain alphanumerics and ':', '_', '.', '-'".to_string(),
        ));
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_keys() {
        for key in ["user:1", "posts:list.page-2", "a", "UPPER_lower-123"] {
            assert!(validate_key(key).is_ok(), "key '{}' should be valid", key);
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            validate_key(""),
            Err(CacheError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_overlong_key_rejected() {
        let key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(matches!(
            validate_key(&key),
            Err(CacheError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_max_length_key_accepted() {
        let key = "x".repeat(MAX_KEY_LENGTH);
        assert!(validate_key(&key).is_ok());
    }

    #[test]
    fn test_bad_charset_rejected() {
        for key in ["with space", "angle<bracket>", "quote'", "semi;colon"] {
            assert!(
                validate_key(key).is_err(),
                "key '{}' should be rejected",
                key
            );
        }
    }
}
