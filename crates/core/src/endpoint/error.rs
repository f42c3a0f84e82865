use thiserror::Error;

/// Errors raised while rendering an endpoint path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("Path {template} takes {expected} parameter(s), got {got}")]
    ParamCount {
        template: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Result type for endpoint operations.
pub type Result<T> = std::result::Result<T, EndpointError>;
