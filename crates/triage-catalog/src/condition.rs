//! Condition records and severity levels.

use std::fmt;
use std::str::FromStr;

/// Severity level of a condition.
///
/// Stored data may author these as free-form labels, but the catalog treats
/// them as a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Self-limiting, routine self-care.
    Low,
    /// Warrants attention, may need professional care.
    Medium,
    /// Needs prompt professional care.
    High,
}

impl Severity {
    /// Returns the authored label for this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized severity label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity label: {0:?}")]
pub struct UnknownSeverity(pub String);

/// One diagnosable condition: a named symptom set with severity,
/// description, and care recommendations.
///
/// Symptom labels keep their authored casing; the engine compares them
/// case-insensitively.
///
/// # Example
///
/// ```rust
/// use triage_catalog::{Condition, Severity};
///
/// let cold = Condition::new(
///     "Common Cold",
///     Severity::Low,
///     "A viral infection affecting the upper respiratory tract",
/// )
/// .with_symptoms(["runny nose", "sneezing", "sore throat"])
/// .with_recommendations(["Get plenty of rest", "Stay hydrated"]);
///
/// assert_eq!(cold.name, "Common Cold");
/// assert_eq!(cold.symptoms.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// Unique human-readable name; the catalog key.
    pub name: String,
    /// Symptom labels in authored order and casing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub symptoms: Vec<String>,
    /// Severity level.
    pub severity: Severity,
    /// Free-text explanation of the condition.
    pub description: String,
    /// Free-text advice strings in authored order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recommendations: Vec<String>,
}

impl Condition {
    /// Creates a condition with no symptoms or recommendations yet.
    pub fn new(
        name: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symptoms: Vec::new(),
            severity,
            description: description.into(),
            recommendations: Vec::new(),
        }
    }

    /// Sets the symptom list.
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the recommendation list.
    pub fn with_recommendations<I, S>(mut self, recommendations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations = recommendations.into_iter().map(Into::into).collect();
        self
    }
}
