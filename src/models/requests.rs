//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies and queries.

use serde::Deserialize;

use crate::error::Result;
use crate::security::validate_key;

/// Request body for the put operation (PUT /cache)
///
/// # Fields
/// - `key`: the cache key to store the value under
/// - `value`: arbitrary JSON to store
/// - `ttl`: optional TTL in seconds (server default when omitted)
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: serde_json::Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl PutRequest {
    /// Validates the key and, when supplied, the TTL.
    ///
    /// # Errors
    /// `InvalidArgument` on an empty/overlong/bad-charset key or a zero
    /// TTL. A zero TTL is rejected rather than treated as "omitted".
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.key)?;
        if self.ttl == Some(0) {
            return Err(crate::error::CacheError::InvalidArgument(
                "TTL must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Query parameters for the invalidate operation (DELETE /cache)
///
/// Without `pattern` the whole cache is cleared; with it, every entry
/// whose key contains the pattern as a substring is removed.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidateParams {
    /// Optional substring to match against keys
    #[serde(default)]
    pub pattern: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_request_deserialize() {
        let body = r#"{"key": "test", "value": "hello"}"#;
        let req: PutRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, json!("hello"));
        assert!(req.ttl.is_none());
    }

    #[test]
    fn test_put_request_with_ttl_and_object_value() {
        let body = r#"{"key": "test", "value": {"n": 1}, "ttl": 60}"#;
        let req: PutRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.ttl, Some(60));
        assert_eq!(req.value["n"], 1);
    }

    #[test]
    fn test_validate_empty_key() {
        let req = PutRequest {
            key: "".to_string(),
            value: json!("v"),
            ttl: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_zero_ttl() {
        let req = PutRequest {
            key: "valid_key".to_string(),
            value: json!("v"),
            ttl: Some(0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = PutRequest {
            key: "valid:key".to_string(),
            value: json!({"a": [1, 2]}),
            ttl: Some(60),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalidate_params_deserialize() {
        let params: InvalidateParams = serde_json::from_str(r#"{"pattern": "user"}"#).unwrap();
        assert_eq!(params.pattern.as_deref(), Some("user"));

        let params: InvalidateParams = serde_json::from_str(r#"{}"#).unwrap();
        assert!(params.pattern.is_none());
    }
}
