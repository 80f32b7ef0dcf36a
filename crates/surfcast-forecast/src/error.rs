//! Aggregation-level error type.

use thiserror::Error;

/// Batch-level failure wrapping the original cause's message.
///
/// The full cause is logged where it happens; callers only ever see this
/// wrapper, which is safe to map to a generic external response.
#[derive(Error, Debug)]
#[error("Unexpected error during the forecast processing: {message}")]
pub struct ForecastProcessingError {
    message: String,
}

impl ForecastProcessingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The wrapped cause message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_cause_message() {
        let err = ForecastProcessingError::new("Network Error");
        assert_eq!(err.message(), "Network Error");
        assert_eq!(
            err.to_string(),
            "Unexpected error during the forecast processing: Network Error"
        );
    }
}
