//! Chart error types

use thiserror::Error;

/// Errors raised while preparing or constructing a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Labels and values must pair up one to one
    #[error("Label/value length mismatch: {labels} labels, {values} values")]
    LengthMismatch { labels: usize, values: usize },

    /// The drawing backend refused to build the chart
    #[error("Chart construction failed: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChartError::LengthMismatch {
            labels: 3,
            values: 2,
        };
        assert_eq!(
            err.to_string(),
            "Label/value length mismatch: 3 labels, 2 values"
        );

        let err = ChartError::Backend("no 2d context".to_string());
        assert_eq!(err.to_string(), "Chart construction failed: no 2d context");
    }
}
