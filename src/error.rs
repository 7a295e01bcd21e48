use thiserror::Error;

/// Top-level error type for the flowtrace crate.
#[derive(Debug, Error)]
pub enum FlowTraceError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors related to angle field construction.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("field must have at least one row and one column")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("non-finite angle {value} at column {col}, row {row}")]
    NonFinite { col: usize, row: usize, value: f64 },
}

/// Errors related to trace request parameters.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("step length {0} must be positive and finite")]
    InvalidStepLength(f64),

    #[error("non-finite {parameter}: {value}")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`FlowTraceError`].
pub type Result<T> = std::result::Result<T, FlowTraceError>;
