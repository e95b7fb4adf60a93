//! JSON response decoding.
//!
//! The service returns whatever shape it pleases (including application-level
//! error documents), so the default decode target is a generic
//! [`serde_json::Value`]. No schema is enforced, and a body that is not valid
//! JSON is always a hard failure; there is no fallback value.

use serde_json::Value;

use crate::Result;

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a mismatch deep inside a nested document
/// reports the exact path that failed (e.g., "businesses.0.name").
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if deserialization fails.
///
/// # Example
///
/// ```
/// use yelp_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Neighborhood { name: String }
///
/// let bytes = br#"{"name":"Noe Valley"}"#;
/// let hood: Neighborhood = from_json(bytes).expect("deserialize");
/// assert_eq!(hood, Neighborhood { name: "Noe Valley".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| crate::Error::decode(e.path().to_string(), e.inner().to_string()))
}

/// Decode a response body into a generic JSON value.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if the body is not valid JSON.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    from_json(bytes)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_round_trip() {
        let value = json!({
            "message": {"text": "OK", "code": 0},
            "businesses": [
                {"name": "Ebisu", "avg_rating": 4.5, "reviews": []},
                {"name": "La Ciccia", "avg_rating": 4.0, "categories": null},
            ],
        });

        let body = serde_json::to_string(&value).expect("serialize");
        let decoded = decode(body.as_bytes()).expect("decode");
        assert_eq!(decoded, value);
    }

    #[test]
    fn decode_scalars() {
        assert_eq!(decode(b"null").expect("decode"), Value::Null);
        assert_eq!(decode(b"true").expect("decode"), json!(true));
        assert_eq!(decode(b"\"ok\"").expect("decode"), json!("ok"));
    }

    #[test]
    fn decode_invalid_json_fails() {
        let result = decode(b"not json");

        let err = result.expect_err("should fail");
        assert!(err.is_decode(), "expected decode error, got: {err}");
    }

    #[test]
    fn decode_empty_body_fails() {
        // An empty body must fail loudly, not come back as Null.
        let result = decode(b"");
        assert!(result.expect_err("should fail").is_decode());
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Business {
            #[allow(dead_code)]
            name: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct SearchResult {
            #[allow(dead_code)]
            businesses: Vec<Business>,
        }

        let bytes = br#"{"businesses":[{"name":"Ebisu"},{}]}"#;
        let result: Result<SearchResult> = from_json(bytes);

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(
            msg.contains("businesses.1"),
            "expected path 'businesses.1' in error: {msg}"
        );
    }
}
