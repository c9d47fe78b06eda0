//! Errors raised at the product form boundary.
//!
//! The normalizer itself has no error type: every input resolves to a value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Required fields that were absent or blank, in form order.
    #[error("Missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
}
