//! Diagnosis engine implementation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use triage_catalog::{CatalogResult, Condition, ConditionCatalog};

use crate::cache::{query_cache_key, QueryCache};
use crate::config::EngineConfig;
use crate::result::{round_score, Diagnosis, DiagnosisReport, DiagnosisStats};

/// Normalizes one query symptom: whitespace-trimmed and lower-cased.
///
/// Applied to every query token before comparison; catalog symptoms are
/// lower-cased on the fly. Matching is exact set membership after this
/// normalization, never substring or fuzzy.
pub fn normalize_symptom(symptom: &str) -> String {
    symptom.trim().to_lowercase()
}

/// Symptom-matching diagnosis engine.
///
/// The engine borrows an immutable [`ConditionCatalog`] and scores every
/// condition in it against a symptom query, returning a ranked list of
/// [`Diagnosis`] results. Each call is an independent pure computation;
/// concurrent calls need no synchronization beyond the optional cache,
/// which is internally locked.
///
/// # Example
///
/// ```rust
/// use triage_catalog::builtin::reference_catalog;
/// use triage_engine::DiagnosisEngine;
///
/// let catalog = reference_catalog();
/// let engine = DiagnosisEngine::new(&catalog);
///
/// let results = engine.diagnose(&["sneezing", "runny nose"]);
/// assert_eq!(results[0].disease, "Seasonal Allergies");
///
/// // No symptoms is a valid, trivial query.
/// assert!(engine.diagnose::<&str>(&[]).is_empty());
/// ```
pub struct DiagnosisEngine<'a> {
    /// The bound catalog.
    catalog: &'a ConditionCatalog,
    /// Engine configuration.
    config: EngineConfig,
    /// Ranked-result cache (optional).
    cache: Option<Arc<QueryCache>>,
}

impl<'a> DiagnosisEngine<'a> {
    /// Creates a new engine with default configuration.
    pub fn new(catalog: &'a ConditionCatalog) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
            cache: None,
        }
    }

    /// Creates an engine with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use triage_catalog::builtin::reference_catalog;
    /// use triage_engine::{CacheConfig, DiagnosisEngine, EngineConfig};
    ///
    /// let catalog = reference_catalog();
    /// let config = EngineConfig::builder()
    ///     .with_cache(CacheConfig::default())
    ///     .with_max_results(3)
    ///     .build();
    /// let engine = DiagnosisEngine::with_config(&catalog, config);
    /// ```
    pub fn with_config(catalog: &'a ConditionCatalog, config: EngineConfig) -> Self {
        let cache = config
            .cache
            .as_ref()
            .map(|c| Arc::new(QueryCache::new(c.clone())));
        Self {
            catalog,
            config,
            cache,
        }
    }

    /// Returns a reference to the bound catalog.
    pub fn catalog(&self) -> &ConditionCatalog {
        self.catalog
    }

    /// Returns a reference to the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns a reference to the cache if enabled.
    pub fn cache(&self) -> Option<&QueryCache> {
        self.cache.as_ref().map(|c| c.as_ref())
    }

    /// Scores every catalog condition against the query and returns the
    /// ranked candidates.
    ///
    /// Query symptoms are normalized (trimmed, lower-cased) before
    /// comparison; order and duplicates are preserved. Conditions with no
    /// matching symptom are excluded rather than scored zero. An empty
    /// query returns an empty list, never an error.
    ///
    /// Results are sorted by overall score descending; equal scores keep
    /// catalog insertion order.
    pub fn diagnose<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<Diagnosis> {
        self.diagnose_report(symptoms).diagnoses
    }

    /// Like [`diagnose`](Self::diagnose), but also reports execution
    /// statistics. Serves the cache when enabled.
    pub fn diagnose_report<S: AsRef<str>>(&self, symptoms: &[S]) -> DiagnosisReport {
        let start = Instant::now();

        if symptoms.is_empty() {
            return DiagnosisReport {
                diagnoses: Vec::new(),
                stats: DiagnosisStats::new(start.elapsed(), 0, false),
            };
        }

        let query: Vec<String> = symptoms
            .iter()
            .map(|s| normalize_symptom(s.as_ref()))
            .collect();

        let cache_key = query_cache_key(&query);

        if let Some(ref cache) = self.cache {
            if let Some(cached) = cache.get(&cache_key) {
                return DiagnosisReport {
                    diagnoses: cached,
                    stats: DiagnosisStats::new(start.elapsed(), 0, true),
                };
            }
        }

        let diagnoses = self.rank(&query);

        if let Some(ref cache) = self.cache {
            cache.set(cache_key, diagnoses.clone());
        }

        DiagnosisReport {
            stats: DiagnosisStats::new(start.elapsed(), self.catalog.len(), false),
            diagnoses,
        }
    }

    /// Returns the highest-ranked diagnosis for the query, if any condition
    /// matches.
    pub fn top_diagnosis<S: AsRef<str>>(&self, symptoms: &[S]) -> Option<Diagnosis> {
        self.diagnose(symptoms).into_iter().next()
    }

    /// Scores a single named condition against the query.
    ///
    /// Bypasses ranking, the result filters, and the cache.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(diagnosis))` - the condition matched at least one symptom
    /// * `Ok(None)` - the condition matched nothing (or the query is empty)
    /// * `Err(CatalogError::ConditionNotFound)` - no such condition
    pub fn score_condition<S: AsRef<str>>(
        &self,
        name: &str,
        symptoms: &[S],
    ) -> CatalogResult<Option<Diagnosis>> {
        let condition = self.catalog.get(name)?;

        let query: Vec<String> = symptoms
            .iter()
            .map(|s| normalize_symptom(s.as_ref()))
            .collect();

        Ok(self.score(condition, &query))
    }

    /// Full catalog scan: score, filter, and rank.
    fn rank(&self, query: &[String]) -> Vec<Diagnosis> {
        let mut diagnoses: Vec<Diagnosis> = self
            .catalog
            .iter()
            .filter_map(|condition| self.score(condition, query))
            .collect();

        // Stable sort on the rounded overall score keeps catalog insertion
        // order as the tie-break.
        diagnoses.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));

        if let Some(min) = self.config.min_overall_score {
            diagnoses.retain(|d| d.overall_score >= min);
        }
        if let Some(max) = self.config.max_results {
            diagnoses.truncate(max);
        }

        diagnoses
    }

    /// Scores one condition against an already-normalized query.
    ///
    /// Returns `None` when the query is empty or nothing matched.
    fn score(&self, condition: &Condition, query: &[String]) -> Option<Diagnosis> {
        if query.is_empty() {
            return None;
        }

        let condition_symptoms: HashSet<String> = condition
            .symptoms
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        // Query order and duplicates survive into matched_symptoms.
        let matched: Vec<String> = query
            .iter()
            .filter(|symptom| condition_symptoms.contains(symptom.as_str()))
            .cloned()
            .collect();

        if matched.is_empty() {
            return None;
        }

        // The match score counts duplicates on both sides of the fraction:
        // the denominator is the raw query length by design. Confidence
        // counts distinct covered symptoms so it cannot exceed 100.
        let distinct_matched = matched.iter().collect::<HashSet<_>>().len();
        let match_score = 100.0 * matched.len() as f64 / query.len() as f64;
        let confidence = 100.0 * distinct_matched as f64 / condition.symptoms.len() as f64;
        let overall_score = self.config.weights.match_weight * match_score
            + self.config.weights.confidence_weight * confidence;

        Some(Diagnosis {
            disease: condition.name.clone(),
            match_score: round_score(match_score),
            confidence: round_score(confidence),
            overall_score: round_score(overall_score),
            matched_symptoms: matched,
            severity: condition.severity,
            description: condition.description.clone(),
            recommendations: condition.recommendations.clone(),
        })
    }
}
