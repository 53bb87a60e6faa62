//! Diagnosis result types and score rounding.

use std::time::Duration;

use triage_catalog::Severity;

/// One scored candidate diagnosis.
///
/// Constructed fresh per [`diagnose`](crate::DiagnosisEngine::diagnose) call
/// and owned by the caller; the engine keeps no shared state with it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnosis {
    /// Name of the matched condition.
    pub disease: String,
    /// Fraction of the query's symptoms found in the condition, 0-100,
    /// rounded to 1 decimal.
    pub match_score: f64,
    /// Fraction of the condition's symptoms found in the query, 0-100,
    /// rounded to 1 decimal.
    pub confidence: f64,
    /// Weighted blend of match score and confidence, 0-100, rounded to
    /// 1 decimal. Results are ranked by this value.
    pub overall_score: f64,
    /// The normalized query symptoms that matched, in query order,
    /// duplicates preserved.
    pub matched_symptoms: Vec<String>,
    /// Severity copied from the matched condition.
    pub severity: Severity,
    /// Description copied from the matched condition.
    pub description: String,
    /// Recommendations copied from the matched condition.
    pub recommendations: Vec<String>,
}

/// A ranked diagnosis list together with execution statistics.
///
/// # Example
///
/// ```ignore
/// let report = engine.diagnose_report(&["sneezing", "runny nose"]);
/// println!(
///     "{} candidates in {:?} (cache hit: {})",
///     report.diagnoses.len(),
///     report.stats.duration,
///     report.stats.cache_hit,
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosisReport {
    /// Ranked candidate diagnoses, best first.
    pub diagnoses: Vec<Diagnosis>,
    /// Execution statistics.
    pub stats: DiagnosisStats,
}

impl DiagnosisReport {
    /// Returns the number of candidate diagnoses.
    pub fn count(&self) -> usize {
        self.diagnoses.len()
    }

    /// Returns true if no condition matched.
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty()
    }

    /// Returns the highest-ranked diagnosis, if any.
    pub fn top(&self) -> Option<&Diagnosis> {
        self.diagnoses.first()
    }

    /// Returns an iterator over the ranked diagnoses.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnosis> {
        self.diagnoses.iter()
    }
}

impl IntoIterator for DiagnosisReport {
    type Item = Diagnosis;
    type IntoIter = std::vec::IntoIter<Diagnosis>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnoses.into_iter()
    }
}

/// Statistics from one diagnose call.
#[derive(Debug, Clone, Default)]
pub struct DiagnosisStats {
    /// Total execution duration.
    pub duration: Duration,
    /// Number of catalog conditions scanned (0 on a cache hit).
    pub conditions_scored: usize,
    /// Whether the result was served from cache.
    pub cache_hit: bool,
}

impl DiagnosisStats {
    /// Creates new diagnosis stats.
    pub fn new(duration: Duration, conditions_scored: usize, cache_hit: bool) -> Self {
        Self {
            duration,
            conditions_scored,
            cache_hit,
        }
    }
}

/// Rounds a score to one decimal place, ties to even.
///
/// Half-to-even matches the rounding the reference data was produced with;
/// naive half-away-from-zero diverges on exact `.x5` boundaries.
pub fn round_score(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score_basic() {
        assert_eq!(round_score(33.333333), 33.3);
        assert_eq!(round_score(76.0), 76.0);
        assert_eq!(round_score(0.0), 0.0);
        assert_eq!(round_score(100.0), 100.0);
    }

    #[test]
    fn test_round_score_ties_to_even() {
        // .x5 boundaries round to the even tenth.
        assert_eq!(round_score(33.25), 33.2);
        assert_eq!(round_score(33.35), 33.4);
        assert_eq!(round_score(0.05), 0.0);
        assert_eq!(round_score(0.15), 0.2);
    }

    #[test]
    fn test_report_accessors() {
        let diagnosis = Diagnosis {
            disease: "Common Cold".to_string(),
            match_score: 100.0,
            confidence: 33.3,
            overall_score: 73.3,
            matched_symptoms: vec!["sneezing".to_string()],
            severity: Severity::Low,
            description: "desc".to_string(),
            recommendations: vec![],
        };
        let report = DiagnosisReport {
            diagnoses: vec![diagnosis.clone()],
            stats: DiagnosisStats::default(),
        };

        assert_eq!(report.count(), 1);
        assert!(!report.is_empty());
        assert_eq!(report.top(), Some(&diagnosis));
        assert_eq!(report.iter().count(), 1);

        let collected: Vec<Diagnosis> = report.into_iter().collect();
        assert_eq!(collected, vec![diagnosis]);
    }

    #[test]
    fn test_stats_new() {
        let stats = DiagnosisStats::new(Duration::from_millis(2), 8, true);
        assert_eq!(stats.duration, Duration::from_millis(2));
        assert_eq!(stats.conditions_scored, 8);
        assert!(stats.cache_hit);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_diagnosis_serialize_field_names() {
        let diagnosis = Diagnosis {
            disease: "Common Cold".to_string(),
            match_score: 100.0,
            confidence: 33.3,
            overall_score: 73.3,
            matched_symptoms: vec!["sneezing".to_string()],
            severity: Severity::Low,
            description: "desc".to_string(),
            recommendations: vec!["Rest".to_string()],
        };

        let json = serde_json::to_value(&diagnosis).unwrap();
        assert_eq!(json["disease"], "Common Cold");
        assert_eq!(json["match_score"], 100.0);
        assert_eq!(json["overall_score"], 73.3);
        assert_eq!(json["severity"], "Low");
        assert_eq!(json["matched_symptoms"][0], "sneezing");
    }
}
