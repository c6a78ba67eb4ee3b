use thiserror::Error;

/// Errors from aggregation. The coercion pass never fails outward: bad
/// numeric input collapses to zero instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Requested column is not present in the header.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
