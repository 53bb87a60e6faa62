//! Configuration types for the diagnosis engine.

use std::time::Duration;

/// Weights for blending the two per-condition scores into the overall score.
///
/// `overall = match_weight * match_score + confidence_weight * confidence`.
/// The default 0.6/0.4 split favors how much of the *query* a condition
/// explains over how much of the *condition* the query covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Weight of the match score (query coverage).
    pub match_weight: f64,
    /// Weight of the confidence score (condition coverage).
    pub confidence_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            match_weight: 0.6,
            confidence_weight: 0.4,
        }
    }
}

/// Configuration for the diagnosis engine.
///
/// # Example
///
/// ```rust
/// use triage_engine::{CacheConfig, EngineConfig};
///
/// let config = EngineConfig::builder()
///     .with_cache(CacheConfig::default())
///     .with_max_results(5)
///     .with_min_overall_score(10.0)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Score blending weights.
    pub weights: ScoreWeights,
    /// Cache configuration (None = caching disabled).
    pub cache: Option<CacheConfig>,
    /// Maximum number of ranked results to return (None = unlimited).
    pub max_results: Option<usize>,
    /// Minimum overall score for a result to be kept (None = keep all).
    pub min_overall_score: Option<f64>,
}

impl EngineConfig {
    /// Creates a new builder for EngineConfig.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    weights: ScoreWeights,
    cache: Option<CacheConfig>,
    max_results: Option<usize>,
    min_overall_score: Option<f64>,
}

impl EngineConfigBuilder {
    /// Sets the score blending weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables result caching with the given configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Sets the maximum number of ranked results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Sets the minimum overall score a result must reach to be kept.
    pub fn with_min_overall_score(mut self, min_overall_score: f64) -> Self {
        self.min_overall_score = Some(min_overall_score);
        self
    }

    /// Builds the EngineConfig.
    pub fn build(self) -> EngineConfig {
        EngineConfig {
            weights: self.weights,
            cache: self.cache,
            max_results: self.max_results,
            min_overall_score: self.min_overall_score,
        }
    }
}

/// Configuration for the query result cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached query results.
    pub max_entries: usize,
    /// Time-to-live for cached entries.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1_000,
            ttl: Duration::from_secs(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_default() {
        let config = EngineConfig::default();
        assert_eq!(config.weights, ScoreWeights::default());
        assert!(config.cache.is_none());
        assert!(config.max_results.is_none());
        assert!(config.min_overall_score.is_none());
    }

    #[test]
    fn test_default_weights_are_60_40() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.match_weight, 0.6);
        assert_eq!(weights.confidence_weight, 0.4);
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::builder()
            .with_weights(ScoreWeights {
                match_weight: 0.5,
                confidence_weight: 0.5,
            })
            .with_cache(CacheConfig::default())
            .with_max_results(3)
            .with_min_overall_score(25.0)
            .build();

        assert_eq!(config.weights.match_weight, 0.5);
        assert!(config.cache.is_some());
        assert_eq!(config.max_results, Some(3));
        assert_eq!(config.min_overall_score, Some(25.0));
    }

    #[test]
    fn test_cache_config_default() {
        let cache = CacheConfig::default();
        assert_eq!(cache.max_entries, 1_000);
        assert_eq!(cache.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_builder_chaining() {
        let config = EngineConfig::builder().with_max_results(10).build();
        assert_eq!(config.max_results, Some(10));
        assert!(config.cache.is_none());
    }
}
