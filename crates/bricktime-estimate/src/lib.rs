//! Assembly time estimation for bricktime.
//!
//! This crate converts `(piece count, builder count)` pairs into estimated
//! build durations:
//!
//! - [`Estimator`] - Validates requests and computes rounded hour estimates
//! - [`round_to_hundredths`] - Round-half-up to two decimal places
//!
//! # Example
//!
//! ```
//! use bricktime_estimate::Estimator;
//! use bricktime_types::BuildRequest;
//!
//! let estimator = Estimator::new();
//! let response = estimator.estimate_single(&BuildRequest::new(9876, 2));
//! assert_eq!(response.estimated_hours(), Some(18.29));
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bricktime/bricktime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::{Estimator, round_to_hundredths};
