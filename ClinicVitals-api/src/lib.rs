// ClinicVitals-api lib.rs
//
// HTTP surface for the ClinicVitals clinical rules.
// Handlers translate between the public entities and the domain services.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
