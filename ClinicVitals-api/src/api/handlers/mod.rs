pub mod dosage;
pub mod health;
pub mod vitals;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use dosage::{calculate_quantity, list_frequencies};
pub use health::health_check;
pub use vitals::{classify_measurement, interpret_measurements, list_reference_ranges};
