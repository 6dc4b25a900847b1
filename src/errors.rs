// ABOUTME: Error types for training plan input validation
// ABOUTME: Defines PlanError with structured variants and the PlanResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used throughout the crate
pub type PlanResult<T> = Result<T, PlanError>;

/// Errors raised when caller-supplied inputs violate the scheduling contract.
///
/// The scheduler itself has no failure mode: every extreme-but-valid input
/// degrades to a warning on the returned plan. These errors only surface from
/// [`crate::validation::validate_inputs`], which runs before scheduling.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The training window is inverted
    #[error("Training start date {start} is after target date {target}")]
    InvalidDateWindow {
        /// First day of training
        start: NaiveDate,
        /// Day of the target hike
        target: NaiveDate,
    },

    /// A numeric field is outside its allowed range
    #[error("Field '{field}' value {value} is outside allowed range {range}")]
    ValueOutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Human-readable description of the allowed range
        range: &'static str,
    },

    /// A floating-point field is NaN or infinite
    #[error("Field '{field}' must be a finite number")]
    NonFiniteValue {
        /// Name of the offending field
        field: &'static str,
    },
}
