use tracing::debug;

use crate::entities::dosage::{MONTHLY, PRN, WEEKLY};
use crate::entities::{dosage_frequencies, find_frequency, DosageFrequency};

/// Total units to dispense for a frequency code over a number of days.
///
/// Unknown codes fall back to one unit per day. `PRN`, `WEEKLY` and
/// `MONTHLY` use fixed divisors instead of their table rate. The result is
/// always rounded up.
pub fn total_quantity(frequency_code: &str, duration_days: u32) -> u32 {
    let Some(frequency) = find_frequency(frequency_code) else {
        debug!(frequency_code, duration_days, "Unknown frequency code; using duration");
        return duration_days;
    };

    let days = f64::from(duration_days);
    let total = match frequency.code {
        PRN => days / 2.0,
        WEEKLY => days / 7.0,
        MONTHLY => days / 30.0,
        _ => frequency.doses_per_day * days,
    };

    round_up_units(total)
}

fn round_up_units(total: f64) -> u32 {
    if total.is_finite() && total > 0.0 {
        // `as` saturates at u32::MAX
        total.ceil() as u32
    } else {
        0
    }
}

/// Trait for prescription quantity operations
pub trait DosageServiceTrait {
    /// Total units to dispense
    fn total_quantity(&self, frequency_code: &str, duration_days: u32) -> u32;

    /// All frequency codes in table order
    fn frequencies(&self) -> Vec<&'static DosageFrequency>;

    /// Look up a single frequency code
    fn find_frequency(&self, code: &str) -> Option<&'static DosageFrequency>;
}

/// Stateless dosage service backed by the static frequency table
#[derive(Debug, Clone, Copy, Default)]
pub struct DosageService;

impl DosageService {
    pub fn new() -> Self {
        Self
    }
}

impl DosageServiceTrait for DosageService {
    fn total_quantity(&self, frequency_code: &str, duration_days: u32) -> u32 {
        total_quantity(frequency_code, duration_days)
    }

    fn frequencies(&self) -> Vec<&'static DosageFrequency> {
        dosage_frequencies().collect()
    }

    fn find_frequency(&self, code: &str) -> Option<&'static DosageFrequency> {
        find_frequency(code)
    }
}

/// Create the default dosage service
pub fn create_default_dosage_service() -> impl DosageServiceTrait + Send + Sync {
    DosageService::new()
}
