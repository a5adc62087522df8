pub mod blood_pressure;
pub mod bmi;
pub mod classifier;
pub mod dosage;
pub mod interpretation;
pub mod presentation;

// Domain services
// Pure clinical rules plus thin service traits for dependency injection.

// Re-export the core operations
pub use blood_pressure::{classify_blood_pressure, BloodPressureCategory};
pub use bmi::{classify_bmi, BmiCategory};
pub use classifier::{classify, classify_parameter};
pub use dosage::{create_default_dosage_service, total_quantity, DosageServiceTrait};
pub use interpretation::{
    create_default_vitals_service, interpret, Interpretation, MeasurementSet, VitalsServiceTrait,
};
pub use presentation::{status_to_style, AssessmentStyle};
