//! # triage-engine
//!
//! Symptom-matching diagnosis engine over an immutable condition catalog.
//!
//! The engine scores every condition in a [`ConditionCatalog`] against a
//! user-supplied symptom query and returns a ranked list of candidate
//! diagnoses. Matching is exact set membership after case/whitespace
//! normalization; there is no fuzzy matching and no learned model.
//!
//! ## Scoring
//!
//! | Score | Meaning | Formula |
//! |-------|---------|---------|
//! | match score | How much of the *query* the condition explains | `100 * matched / query length` |
//! | confidence | How much of the *condition* the query covers | `100 * distinct matched / condition symptoms` |
//! | overall | Ranking key | `0.6 * match + 0.4 * confidence` (weights configurable) |
//!
//! All three are rounded to one decimal place, ties to even. Results are
//! sorted by overall score descending; equal scores keep catalog insertion
//! order. Conditions matching nothing are omitted entirely.
//!
//! ## Quick Start
//!
//! ```rust
//! use triage_catalog::builtin::reference_catalog;
//! use triage_engine::DiagnosisEngine;
//!
//! let catalog = reference_catalog();
//! let engine = DiagnosisEngine::new(&catalog);
//!
//! for diagnosis in engine.diagnose(&["sneezing", "runny nose"]) {
//!     println!(
//!         "{} ({}): {:.1}",
//!         diagnosis.disease, diagnosis.severity, diagnosis.overall_score
//!     );
//! }
//! ```
//!
//! ## With Configuration
//!
//! ```rust
//! use triage_catalog::builtin::reference_catalog;
//! use triage_engine::{CacheConfig, DiagnosisEngine, EngineConfig};
//!
//! let catalog = reference_catalog();
//! let config = EngineConfig::builder()
//!     .with_cache(CacheConfig::default())
//!     .with_max_results(5)
//!     .with_min_overall_score(10.0)
//!     .build();
//!
//! let engine = DiagnosisEngine::with_config(&catalog, config);
//! let report = engine.diagnose_report(&["cough", "fatigue"]);
//! assert!(!report.stats.cache_hit);
//! ```
//!
//! ## Concurrency
//!
//! `diagnose` is a pure function of catalog + query: no shared mutable
//! state, no blocking I/O, no internal concurrency. Callers may invoke it
//! from many threads at once; the optional result cache is internally
//! synchronized.
//!
//! ## Feature Flags
//!
//! - `serde` - Enables `Serialize`/`Deserialize` for [`Diagnosis`] (and the
//!   catalog types), for boundary layers that serialize results.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod engine;
mod result;

// Public re-exports
pub use cache::{query_cache_key, CacheStats, QueryCache};
pub use config::{CacheConfig, EngineConfig, EngineConfigBuilder, ScoreWeights};
pub use engine::{normalize_symptom, DiagnosisEngine};
pub use result::{round_score, Diagnosis, DiagnosisReport, DiagnosisStats};

// Re-export commonly used types from the catalog crate for convenience
pub use triage_catalog::{CatalogError, CatalogResult, Condition, ConditionCatalog, Severity};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_accessible() {
        let _: Option<EngineConfig> = None;
        let _: Option<CacheConfig> = None;
        let _: Option<Diagnosis> = None;
        let _: Option<DiagnosisReport> = None;
        let _: Option<CacheStats> = None;
    }

    #[test]
    fn test_re_exports() {
        let catalog = triage_catalog::builtin::reference_catalog();
        let _: &ConditionCatalog = &catalog;
        let _: Severity = Severity::Low;
    }
}
