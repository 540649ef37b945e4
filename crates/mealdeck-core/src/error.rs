//! Error types for store mutations and form validation.

use thiserror::Error;

/// A required form field was left blank. Surfaced inline on the form; the
/// mutation is not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Recipe name is required")]
    MissingName,
    #[error("Category is required")]
    MissingCategory,
}

/// No record with the given identifier exists in the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no recipe with id {0:?}")]
pub struct NotFound(pub String);

/// Failure of a store mutation that both validates and looks up a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFound),
}
