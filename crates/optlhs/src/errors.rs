use thiserror::Error;

/// A result type for optimal LHS construction
pub type Result<T> = std::result::Result<T, OptLhsError>;

/// An error when configuring or running an optimal LHS algorithm
#[derive(Error, Debug)]
pub enum OptLhsError {
    /// When a profile, criterion or algorithm configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfigError(String),
    /// When a given design does not match the expected one
    #[error("Value error: {0}")]
    InvalidValue(String),
    /// When an history table cannot be assembled
    #[error(transparent)]
    ShapeError(#[from] ndarray::ShapeError),
}
