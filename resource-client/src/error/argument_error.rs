//! Call argument errors.

use thiserror::Error;

/// A handler was called with fewer path parameters than its endpoint declares.
///
/// `missing` holds the declared parameter names that had no value, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("This endpoint must be supplied with the following parameters: {}", .missing.join(","))]
pub struct ArgumentCountError {
    /// Names of the parameters without a value.
    pub missing: Vec<String>,
}

impl ArgumentCountError {
    pub fn new(missing: Vec<String>) -> Self {
        Self { missing }
    }
}
