//! Estimation response representation.

use serde::{Deserialize, Serialize};

use crate::EstimateError;

/// The outcome of a single estimation request.
///
/// Exactly one of the two fields appears on the wire per response, matching
/// the invocation contract's value-or-error shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildResponse {
    /// Estimation succeeded.
    Success {
        /// Estimated assembly time in hours, rounded to two decimal places.
        #[serde(rename = "estimatedHours")]
        estimated_hours: f64,
    },
    /// The request was rejected or the calculation failed.
    Failure {
        /// Human-readable description of what went wrong.
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

impl BuildResponse {
    /// Creates a successful response.
    #[must_use]
    pub const fn success(estimated_hours: f64) -> Self {
        Self::Success { estimated_hours }
    }

    /// Creates a failed response.
    #[must_use]
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self::Failure {
            error_message: error_message.into(),
        }
    }

    /// Returns the estimated hours, if the estimation succeeded.
    #[must_use]
    pub const fn estimated_hours(&self) -> Option<f64> {
        match self {
            Self::Success { estimated_hours } => Some(*estimated_hours),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the error message, if the estimation failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_message } => Some(error_message),
        }
    }

    /// Returns true if the estimation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<EstimateError> for BuildResponse {
    fn from(err: EstimateError) -> Self {
        Self::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Received;

    #[test]
    fn test_accessors() {
        let success = BuildResponse::success(18.29);
        assert!(success.is_success());
        assert_eq!(success.estimated_hours(), Some(18.29));
        assert_eq!(success.error_message(), None);

        let failure = BuildResponse::failure("bad input");
        assert!(!failure.is_success());
        assert_eq!(failure.estimated_hours(), None);
        assert_eq!(failure.error_message(), Some("bad input"));
    }

    #[test]
    fn test_success_wire_shape() {
        let json = serde_json::to_value(BuildResponse::success(18.29)).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["estimatedHours"], 18.29);
    }

    #[test]
    fn test_failure_wire_shape() {
        let json = serde_json::to_value(BuildResponse::failure("bad input")).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["errorMessage"], "bad input");
    }

    #[test]
    fn test_deserialize_both_variants() {
        let success: BuildResponse = serde_json::from_str(r#"{"estimatedHours": 0.15}"#).unwrap();
        assert_eq!(success, BuildResponse::success(0.15));

        let failure: BuildResponse = serde_json::from_str(r#"{"errorMessage": "oops"}"#).unwrap();
        assert_eq!(failure, BuildResponse::failure("oops"));
    }

    #[test]
    fn test_from_error() {
        let response = BuildResponse::from(EstimateError::InvalidPieceCount(Received(Some(0))));
        assert_eq!(
            response.error_message(),
            Some("Number of pieces must be a positive integer. Received: 0")
        );
    }
}
