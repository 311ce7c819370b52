//! Table construction errors.

use thiserror::Error;

/// Errors raised while assembling a table.
///
/// Rendering itself never fails: missing values degrade to a placeholder and
/// out-of-range page requests are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two column descriptors share the same key.
    #[error("duplicate column key: {0}")]
    DuplicateColumnKey(String),
}
