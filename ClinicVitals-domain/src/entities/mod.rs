// Domain entities, value objects and the static clinical tables
pub mod assessment;
pub mod dosage;
pub mod measurement;
pub mod reference_range;

// Re-export common types for easier imports
pub use assessment::{Assessment, AssessmentStatus, NOT_APPLICABLE};
pub use dosage::{dosage_frequencies, find_frequency, DosageFrequency};
pub use measurement::{MeasurementError, MeasurementValue, Parameter, PatientContext};
pub use reference_range::{reference_range, reference_ranges, PopulationGroup, ReferenceRange};
