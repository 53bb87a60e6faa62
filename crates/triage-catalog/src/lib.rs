//! # triage-catalog
//!
//! Immutable condition catalog for symptom-based triage.
//!
//! This crate provides the data model a diagnosis engine scores against:
//! - **[`Condition`]**: a named symptom set with severity, description, and
//!   care recommendations
//! - **[`ConditionCatalog`]**: an immutable, insertion-ordered collection of
//!   conditions, indexed by name, with a cached symptom vocabulary
//!
//! The catalog is a value object: validated once at construction, never
//! mutated afterwards. Construct one at startup and share it by reference
//! with however many engine instances or request handlers need it.
//!
//! ## Usage
//!
//! ```rust
//! use triage_catalog::{CatalogBuilder, Condition, Severity};
//!
//! let catalog = CatalogBuilder::new()
//!     .condition(
//!         Condition::new("Common Cold", Severity::Low, "Upper respiratory infection")
//!             .with_symptoms(["runny nose", "sneezing", "sore throat"])
//!             .with_recommendations(["Get plenty of rest", "Stay hydrated"]),
//!     )
//!     .condition(
//!         Condition::new("Migraine", Severity::Medium, "Neurological condition")
//!             .with_symptoms(["severe headache", "nausea"]),
//!     )
//!     .build()?;
//!
//! // Derived vocabulary for UI population: distinct, lower-cased, sorted.
//! assert_eq!(catalog.all_symptoms().len(), 5);
//!
//! // Exact-name lookup.
//! let migraine = catalog.get("Migraine")?;
//! assert_eq!(migraine.severity, Severity::Medium);
//! # Ok::<(), triage_catalog::CatalogError>(())
//! ```
//!
//! ## Validation
//!
//! | Rule | Error |
//! |------|-------|
//! | At least one record | [`CatalogError::EmptyCatalog`] |
//! | Names unique across the catalog | [`CatalogError::DuplicateConditionName`] |
//! | Every record has at least one symptom | [`CatalogError::EmptySymptoms`] |
//!
//! Construction errors are fatal by design: the catalog is foundational and
//! callers are expected to abort startup on failure. Lookup failures
//! ([`CatalogError::ConditionNotFound`]) are recoverable.
//!
//! ## Feature Flags
//!
//! - `serde` - Enables `Serialize`/`Deserialize` for [`Condition`] and
//!   [`Severity`], so catalogs can be loaded from configuration files.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builtin;
mod catalog;
mod condition;
mod error;

pub use catalog::{CatalogBuilder, ConditionCatalog};
pub use condition::{Condition, Severity, UnknownSeverity};
pub use error::{CatalogError, CatalogResult};
