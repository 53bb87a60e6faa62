//! Built-in reference catalog of common conditions.

use crate::catalog::{CatalogBuilder, ConditionCatalog};
use crate::condition::{Condition, Severity};

/// Builds the reference catalog of eight common conditions.
///
/// This is realistic starter data for demos and tests; production callers
/// typically build their own catalog (or deserialize one, with the `serde`
/// feature) instead.
///
/// # Example
///
/// ```rust
/// let catalog = triage_catalog::builtin::reference_catalog();
/// assert_eq!(catalog.len(), 8);
/// assert!(catalog.contains("Common Cold"));
/// ```
pub fn reference_catalog() -> ConditionCatalog {
    let catalog = CatalogBuilder::new()
        .condition(
            Condition::new(
                "Common Cold",
                Severity::Low,
                "A viral infection affecting the upper respiratory tract",
            )
            .with_symptoms([
                "runny nose",
                "sneezing",
                "sore throat",
                "cough",
                "mild fever",
                "fatigue",
            ])
            .with_recommendations([
                "Get plenty of rest",
                "Stay hydrated",
                "Use over-the-counter cold medications",
                "Consult a doctor if symptoms persist beyond 10 days",
            ]),
        )
        .condition(
            Condition::new(
                "Influenza (Flu)",
                Severity::Medium,
                "A viral infection that attacks the respiratory system",
            )
            .with_symptoms([
                "high fever",
                "body aches",
                "fatigue",
                "headache",
                "cough",
                "sore throat",
                "chills",
            ])
            .with_recommendations([
                "Rest and stay home",
                "Drink plenty of fluids",
                "Take antiviral medications if prescribed",
                "Seek medical attention if symptoms worsen",
            ]),
        )
        .condition(
            Condition::new(
                "Seasonal Allergies",
                Severity::Low,
                "Allergic reaction to pollen, dust, or other environmental allergens",
            )
            .with_symptoms([
                "sneezing",
                "runny nose",
                "itchy eyes",
                "watery eyes",
                "congestion",
            ])
            .with_recommendations([
                "Avoid allergen triggers",
                "Use antihistamines",
                "Keep windows closed during high pollen counts",
                "Consider seeing an allergist",
            ]),
        )
        .condition(
            Condition::new(
                "Migraine",
                Severity::Medium,
                "A neurological condition causing intense headaches",
            )
            .with_symptoms([
                "severe headache",
                "nausea",
                "sensitivity to light",
                "sensitivity to sound",
                "visual disturbances",
            ])
            .with_recommendations([
                "Rest in a dark, quiet room",
                "Apply cold compress to head",
                "Take prescribed migraine medications",
                "Identify and avoid triggers",
            ]),
        )
        .condition(
            Condition::new(
                "Gastroenteritis",
                Severity::Medium,
                "Inflammation of the digestive tract, often called stomach flu",
            )
            .with_symptoms([
                "diarrhea",
                "nausea",
                "vomiting",
                "stomach cramps",
                "mild fever",
                "fatigue",
            ])
            .with_recommendations([
                "Stay hydrated with clear fluids",
                "Eat bland foods when tolerated",
                "Rest",
                "Seek medical attention if severe dehydration occurs",
            ]),
        )
        .condition(
            Condition::new(
                "Anxiety",
                Severity::Medium,
                "Mental health condition characterized by excessive worry",
            )
            .with_symptoms([
                "nervousness",
                "rapid heartbeat",
                "sweating",
                "difficulty concentrating",
                "restlessness",
                "fatigue",
            ])
            .with_recommendations([
                "Practice relaxation techniques",
                "Regular exercise",
                "Adequate sleep",
                "Consider therapy or counseling",
            ]),
        )
        .condition(
            Condition::new(
                "Bronchitis",
                Severity::Medium,
                "Inflammation of the bronchial tubes in the lungs",
            )
            .with_symptoms([
                "persistent cough",
                "mucus production",
                "fatigue",
                "shortness of breath",
                "chest discomfort",
                "mild fever",
            ])
            .with_recommendations([
                "Rest and drink fluids",
                "Use a humidifier",
                "Avoid lung irritants",
                "See a doctor if symptoms persist",
            ]),
        )
        .condition(
            Condition::new(
                "Urinary Tract Infection",
                Severity::Medium,
                "Bacterial infection affecting the urinary system",
            )
            .with_symptoms([
                "burning sensation during urination",
                "frequent urination",
                "cloudy urine",
                "pelvic pain",
                "strong-smelling urine",
            ])
            .with_recommendations([
                "Drink plenty of water",
                "Take antibiotics as prescribed",
                "Urinate frequently",
                "Seek medical attention for proper diagnosis",
            ]),
        )
        .build();

    // The data above is static and valid; a failure here is a bug in this
    // module, not a runtime condition.
    match catalog {
        Ok(catalog) => catalog,
        Err(err) => unreachable!("built-in reference data is invalid: {err}"),
    }
}
