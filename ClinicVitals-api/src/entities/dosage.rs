use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use clinic_vitals_domain::entities::DosageFrequency;

/// Request payload for a dispensing quantity
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct QuantityRequest {
    /// Frequency code, e.g. "BD", "Q8H", "PRN"
    #[validate(length(min = 1, max = 16, message = "Frequency code must be 1 to 16 characters"))]
    pub frequency_code: String,

    /// Course length in days
    #[validate(range(min = 1, max = 3650, message = "Duration must be between 1 and 3650 days"))]
    pub duration_days: u32,
}

/// Computed dispensing quantity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuantityResponse {
    /// The code as looked up, trimmed and upper-cased
    pub frequency_code: String,
    pub duration_days: u32,
    /// Total units to dispense, rounded up
    pub quantity: u32,
    /// Whether the code was found in the frequency table
    pub recognized: bool,
}

/// Public representation of a frequency table row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicDosageFrequency {
    pub code: String,
    pub description: String,
    pub doses_per_day: f64,
}

/// Convert a frequency table row to its public form
pub fn convert_to_public_frequency(frequency: &DosageFrequency) -> PublicDosageFrequency {
    PublicDosageFrequency {
        code: frequency.code.to_string(),
        description: frequency.description.to_string(),
        doses_per_day: frequency.doses_per_day,
    }
}
