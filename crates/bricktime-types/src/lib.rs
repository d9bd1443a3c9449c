//! Core types for the bricktime assembly time estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! bricktime:
//!
//! - [`BuildRequest`] - A single estimation request (piece and builder counts)
//! - [`BuildResponse`] - The value-or-error outcome for one request
//! - [`EstimateError`] - Validation and calculation failures
//! - [`Received`] - Offending input values echoed back in error messages

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/bricktime/bricktime/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod request;
mod response;

pub use error::{EstimateError, Received, Result};
pub use request::BuildRequest;
pub use response::BuildResponse;
