// ClinicVitals Domain
// This crate contains the clinical rules for the ClinicVitals application:
// vital-sign interpretation, blood pressure staging, BMI and dosage quantities.
// Everything here is pure and synchronous apart from the health report.

// Domain entities and the static reference tables
pub mod entities;

// Services that implement the clinical rules
pub mod services;

// Health checks and system status
pub mod health;

pub use entities::{Assessment, AssessmentStatus, MeasurementValue, Parameter, PatientContext};
pub use services::{classify, interpret, total_quantity};
