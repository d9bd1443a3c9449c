//! Assembly time estimation logic.

use bricktime_types::{BuildRequest, BuildResponse, EstimateError, Received, Result};

/// Seconds for a single builder to place one piece.
const SECONDS_PER_PIECE: f64 = 12.0;

/// Effectiveness lost by each additional builder, relative to a solo builder.
const TAPER_PER_BUILDER: f64 = 0.2;

/// Minimum contribution of any additional builder.
const MIN_CONTRIBUTION: f64 = 0.1;

/// Seconds in one hour.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Assembly time estimator.
///
/// Stateless: every request is validated and computed independently, so a
/// batch is a pure positional mapping from requests to responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator;

impl Estimator {
    /// Creates a new estimator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Estimates assembly time for a batch of requests.
    ///
    /// Produces exactly one response per request, in the same order. A failed
    /// request yields a failure response at its position and has no effect on
    /// the outcome of any other request.
    #[must_use]
    pub fn estimate_batch(&self, requests: &[BuildRequest]) -> Vec<BuildResponse> {
        requests
            .iter()
            .map(|request| self.estimate_single(request))
            .collect()
    }

    /// Estimates assembly time for a single request.
    ///
    /// Never panics and never propagates an error: validation and calculation
    /// failures are folded into the response's error message.
    #[must_use]
    pub fn estimate_single(&self, request: &BuildRequest) -> BuildResponse {
        match self.calculate(request) {
            Ok(hours) => BuildResponse::success(hours),
            Err(err) => BuildResponse::from(err),
        }
    }

    /// Validates a request and computes the rounded estimate in hours.
    fn calculate(&self, request: &BuildRequest) -> Result<f64> {
        let piece_count = match request.piece_count {
            Some(count) if count > 0 => count,
            other => return Err(EstimateError::InvalidPieceCount(Received(other))),
        };
        let builder_count = match request.builder_count {
            Some(count) if count > 0 => count,
            other => return Err(EstimateError::InvalidBuilderCount(Received(other))),
        };

        let factor = Self::collaboration_factor(builder_count);
        // Unreachable for validated inputs: the factor starts at 1.0 and only
        // grows. Kept as an invariant check should validation ever change.
        if factor == 0.0 {
            return Err(EstimateError::Calculation(
                "collaboration factor resolved to zero".to_string(),
            ));
        }

        let base_seconds = piece_count as f64 * SECONDS_PER_PIECE;
        let effective_seconds = base_seconds / factor;
        let hours = effective_seconds / SECONDS_PER_HOUR;
        if !hours.is_finite() {
            return Err(EstimateError::Calculation(format!(
                "estimated hours is not a finite number ({hours})"
            )));
        }

        Ok(round_to_hundredths(hours))
    }

    /// Combined throughput of `builder_count` builders relative to one builder.
    ///
    /// The first builder contributes 1.0. Each additional builder at index `i`
    /// contributes `max(0.1, 1.0 - 0.2 * i)`: contributions taper linearly by
    /// 20 percentage points per builder, floored at 0.1. The factor is exactly
    /// 1.0 for a single builder and strictly increasing in `builder_count`.
    #[must_use]
    pub fn collaboration_factor(builder_count: i64) -> f64 {
        let mut factor = 1.0;
        for i in 1..builder_count {
            let taper = 1.0 - TAPER_PER_BUILDER * i as f64;
            if taper <= MIN_CONTRIBUTION {
                // Every builder from index i onward contributes the floor.
                factor += (builder_count - i) as f64 * MIN_CONTRIBUTION;
                break;
            }
            factor += taper;
        }
        factor
    }

    /// Formats an estimate with exactly two fractional digits.
    #[must_use]
    pub fn format_hours(hours: f64) -> String {
        format!("{hours:.2}")
    }

    /// Formats an estimate in hours as a human-readable duration (e.g. "18h 17m").
    #[must_use]
    pub fn format_duration(hours: f64) -> String {
        let total_minutes = (hours * 60.0).round() as u64;
        let h = total_minutes / 60;
        let m = total_minutes % 60;

        if h > 0 {
            if m > 0 {
                format!("{h}h {m}m")
            } else {
                format!("{h}h")
            }
        } else {
            format!("{m}m")
        }
    }
}

/// Rounds to two decimal places, with ties rounding away from zero.
///
/// This is the round-half-up rule of the invocation contract: 0.125 rounds to
/// 0.13, not 0.12.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
