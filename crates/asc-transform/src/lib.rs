//! Transformation passes over parsed accounting tables.
//!
//! - **numeric**: name-pattern-driven numeric coercion with a zero fallback
//! - **aggregate**: key-grouped consolidation of a numeric column

pub mod aggregate;
pub mod error;
pub mod numeric;

pub use aggregate::{AggregateResult, aggregate_by_key};
pub use error::{Result, TransformError};
pub use numeric::{coerce, parse_amount};
