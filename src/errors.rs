//! Error types for the visualizer engine
//!
//! This module defines [`VizError`], which covers every operation the engine can
//! reject. None of these are fatal: a rejected operation leaves the live structure
//! and the currently displayed step untouched, and the session turns the error
//! into a short-lived notice for the user.
//!
//! Duplicate inserts and failed searches are *not* errors. They are ordinary
//! outcomes recorded as the narration of the final step.

use crate::model::Element;
use thiserror::Error;

/// Errors that can occur while dispatching an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    /// Non-numeric or missing input
    #[error("Please enter a valid number (got '{input}')")]
    InvalidInput { input: String },

    /// Container is already at its configured bound
    #[error("{structure} is full, cannot hold more than {capacity} items")]
    CapacityExceeded {
        structure: &'static str,
        capacity: usize,
    },

    /// Removal from an empty container
    #[error("{structure} is empty")]
    Underflow { structure: &'static str },

    /// List insert/delete at an index outside the valid range
    #[error("Invalid index {index} (length is {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Search or sort requested on an empty array
    #[error("Array is empty. Please generate a random array first")]
    EmptyStructure,

    /// Command not available for the active visualizer
    #[error("'{command}' is not available in the {visualizer} visualizer")]
    Unsupported {
        command: &'static str,
        visualizer: &'static str,
    },

    /// Random generation requested with an unusable size or range
    #[error("Cannot generate {size} values below {max_value}")]
    InvalidRandomRange { size: usize, max_value: Element },

    /// Bad startup configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl VizError {
    /// Whether the error is a recoverable, user-facing rejection
    pub fn is_transient(&self) -> bool {
        !matches!(self, VizError::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = VizError::CapacityExceeded {
            structure: "Stack",
            capacity: 20,
        };
        assert_eq!(
            err.to_string(),
            "Stack is full, cannot hold more than 20 items"
        );

        let err = VizError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Invalid index 7 (length is 3)");
    }

    #[test]
    fn test_config_errors_are_not_transient() {
        assert!(VizError::EmptyStructure.is_transient());
        assert!(!VizError::InvalidConfig {
            message: "capacity".to_string()
        }
        .is_transient());
    }
}
