//! The immutable condition catalog.

use std::collections::{BTreeSet, HashMap};

use crate::condition::Condition;
use crate::error::{CatalogError, CatalogResult};

/// An immutable, in-memory collection of [`Condition`] records.
///
/// The catalog preserves insertion order — the diagnosis engine relies on it
/// as the tie-break between equally scored results — and indexes records by
/// name for exact lookup. The set of all distinct symptom labels
/// (lower-cased, sorted) is derived once at build time and cached.
///
/// No mutation is exposed after construction.
///
/// # Example
///
/// ```rust
/// use triage_catalog::{CatalogBuilder, Condition, Severity};
///
/// let catalog = CatalogBuilder::new()
///     .condition(
///         Condition::new("Common Cold", Severity::Low, "Upper respiratory infection")
///             .with_symptoms(["runny nose", "Sneezing"]),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.all_symptoms(), ["runny nose", "sneezing"]);
/// ```
#[derive(Debug, Clone)]
pub struct ConditionCatalog {
    /// Records in insertion order.
    records: Vec<Condition>,
    /// Name -> position in `records`.
    index: HashMap<String, usize>,
    /// All distinct symptom labels, lower-cased and sorted.
    vocabulary: Vec<String>,
}

impl ConditionCatalog {
    /// Builds a catalog from a collection of condition records.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::EmptyCatalog`] if no records are supplied.
    /// * [`CatalogError::DuplicateConditionName`] if two records share a name.
    /// * [`CatalogError::EmptySymptoms`] if a record has no symptoms.
    pub fn new<I>(records: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = Condition>,
    {
        let records: Vec<Condition> = records.into_iter().collect();

        if records.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.symptoms.is_empty() {
                return Err(CatalogError::EmptySymptoms {
                    condition: record.name.clone(),
                });
            }
            if index.insert(record.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateConditionName(record.name.clone()));
            }
        }

        // Derive the global symptom vocabulary: distinct, lower-cased, sorted.
        let vocabulary: Vec<String> = records
            .iter()
            .flat_map(|record| record.symptoms.iter())
            .map(|symptom| symptom.to_lowercase())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        Ok(Self {
            records,
            index,
            vocabulary,
        })
    }

    /// Returns all distinct symptom labels across the catalog, lower-cased
    /// and sorted lexicographically.
    ///
    /// Computed once at build time; the same catalog always yields the same
    /// sequence.
    pub fn all_symptoms(&self) -> &[String] {
        &self.vocabulary
    }

    /// Looks up a condition by exact name.
    ///
    /// # Errors
    ///
    /// [`CatalogError::ConditionNotFound`] if no record has that name.
    pub fn get(&self, name: &str) -> CatalogResult<&Condition> {
        self.index
            .get(name)
            .map(|&position| &self.records[position])
            .ok_or_else(|| CatalogError::ConditionNotFound(name.to_string()))
    }

    /// Returns true if a condition with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.records.iter()
    }

    /// Returns the number of conditions in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog has no records.
    ///
    /// Always false for a successfully built catalog.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConditionCatalog {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Builder for [`ConditionCatalog`].
///
/// Collects condition records and validates them as a whole on
/// [`build`](CatalogBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    records: Vec<Condition>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one condition record.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.records.push(condition);
        self
    }

    /// Adds several condition records.
    pub fn conditions<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = Condition>,
    {
        self.records.extend(conditions);
        self
    }

    /// Validates the collected records and builds the catalog.
    ///
    /// # Errors
    ///
    /// Same as [`ConditionCatalog::new`].
    pub fn build(self) -> CatalogResult<ConditionCatalog> {
        ConditionCatalog::new(self.records)
    }
}
