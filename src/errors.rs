//! # Error Types
//!
//! Structured error types for the calculation engine. Every fallible
//! operation returns one of these rather than panicking: a bad dimension or
//! an unknown tendon product is expected input, not a bug.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::degenerate_span(span_m, "span must be positive"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant carries enough context to report which pipeline stage
/// failed and why. Downstream stages forward a dependency's error
/// unchanged; they never continue with partial or zeroed data.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A section dimension is non-positive or geometrically inconsistent
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// A non-geometric input value is invalid (out of range, wrong sign)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unknown tendon product code, or a tendon count with no layout table
    #[error("Invalid tendon selection '{selection}': {reason}")]
    InvalidTendonSelection { selection: String, reason: String },

    /// Zero or negative span where division by span/half-span occurs
    #[error("Degenerate span: {value_m} m - {reason}")]
    DegenerateSpan { value_m: f64, reason: String },

    /// Iterative solver exceeded its iteration cap without meeting tolerance
    #[error("Solver did not converge after {iterations} iterations (residual {residual})")]
    NonConvergence { iterations: u32, residual: f64 },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: f64,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidTendonSelection error
    pub fn invalid_tendon(selection: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidTendonSelection {
            selection: selection.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateSpan error
    pub fn degenerate_span(value_m: f64, reason: impl Into<String>) -> Self {
        CalcError::DegenerateSpan {
            value_m,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidTendonSelection { .. } => "INVALID_TENDON_SELECTION",
            CalcError::DegenerateSpan { .. } => "DEGENERATE_SPAN",
            CalcError::NonConvergence { .. } => "NON_CONVERGENCE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("web_width_mm", -5.0, "must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::degenerate_span(0.0, "zero span").error_code(),
            "DEGENERATE_SPAN"
        );
        assert_eq!(
            CalcError::invalid_tendon("99X", "unknown product").error_code(),
            "INVALID_TENDON_SELECTION"
        );
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::NonConvergence {
            iterations: 100,
            residual: 0.05,
        };
        let msg = error.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("0.05"));
    }
}
