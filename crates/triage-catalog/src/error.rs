//! Error types for catalog construction and lookup.

use thiserror::Error;

/// Errors that can occur when building or querying a condition catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No condition records were supplied.
    #[error("catalog has no condition records")]
    EmptyCatalog,

    /// Two records share the same condition name.
    #[error("duplicate condition name: {0:?}")]
    DuplicateConditionName(String),

    /// A record was supplied with an empty symptom list.
    #[error("condition {condition:?} has no symptoms")]
    EmptySymptoms {
        /// Name of the offending condition.
        condition: String,
    },

    /// Lookup of a condition name that does not exist.
    #[error("condition not found: {0:?}")]
    ConditionNotFound(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
