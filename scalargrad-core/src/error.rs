use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// An operand of an unsupported kind was passed to an operation,
    /// e.g. a tracked `Value` used as the exponent of `pow`.
    #[error("Invalid operand kind for operation {operation}: {reason}")]
    InvalidOperandKind { operation: String, reason: String },

    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Input length mismatch: expected {expected} values, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },
}
