// Public entities for the ClinicVitals API
// Request and response shapes shared across the application boundary

// Measurement classification and interpretation
pub mod vitals;

// Prescription quantities
pub mod dosage;

// Common entities for error handling
pub mod common;
