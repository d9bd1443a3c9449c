//! Estimate command implementation.
//!
//! Runs a single estimation request and prints a human-readable summary.

use anyhow::{Result, bail};
use bricktime_estimate::Estimator;
use bricktime_types::{BuildRequest, BuildResponse};

use crate::display;

/// Estimate assembly time for a single build and print the result.
pub(crate) fn estimate(pieces: i64, builders: i64) -> Result<()> {
    let estimator = Estimator::new();
    let request = BuildRequest::new(pieces, builders);

    match estimator.estimate_single(&request) {
        BuildResponse::Success { estimated_hours } => {
            display::print_estimate(pieces, builders, estimated_hours);
            Ok(())
        }
        BuildResponse::Failure { error_message } => bail!(error_message),
    }
}
