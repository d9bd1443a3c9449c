//! Estimation request representation.

use serde::{Deserialize, Serialize};

/// A single estimation request supplied by the caller.
///
/// Both counts are optional on the wire; a missing or non-positive value is
/// rejected during validation with a per-request error message rather than a
/// deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    /// Total number of discrete pieces in the project.
    #[serde(default)]
    pub piece_count: Option<i64>,
    /// Number of people collaborating simultaneously.
    #[serde(default)]
    pub builder_count: Option<i64>,
}

impl BuildRequest {
    /// Creates a request with both counts present.
    #[must_use]
    pub const fn new(piece_count: i64, builder_count: i64) -> Self {
        Self {
            piece_count: Some(piece_count),
            builder_count: Some(builder_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let request: BuildRequest =
            serde_json::from_str(r#"{"pieceCount": 9876, "builderCount": 2}"#).unwrap();
        assert_eq!(request, BuildRequest::new(9876, 2));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let request: BuildRequest = serde_json::from_str(r#"{"builderCount": 2}"#).unwrap();
        assert_eq!(request.piece_count, None);
        assert_eq!(request.builder_count, Some(2));

        let request: BuildRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, BuildRequest::default());
    }

    #[test]
    fn test_deserialize_null_field() {
        let request: BuildRequest =
            serde_json::from_str(r#"{"pieceCount": null, "builderCount": 2}"#).unwrap();
        assert_eq!(request.piece_count, None);
        assert_eq!(request.builder_count, Some(2));
    }

    #[test]
    fn test_serialize_uses_contract_names() {
        let json = serde_json::to_value(BuildRequest::new(45, 1)).unwrap();
        assert_eq!(json["pieceCount"], 45);
        assert_eq!(json["builderCount"], 1);
    }
}
