use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

/// As-needed dosing
pub const PRN: &str = "PRN";
pub const WEEKLY: &str = "WEEKLY";
pub const MONTHLY: &str = "MONTHLY";

/// A dosing schedule code and its daily rate.
///
/// Irregular schedules carry a zero (PRN) or fractional rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DosageFrequency {
    pub code: &'static str,
    pub description: &'static str,
    pub doses_per_day: f64,
}

impl DosageFrequency {
    const fn new(code: &'static str, description: &'static str, doses_per_day: f64) -> Self {
        Self {
            code,
            description,
            doses_per_day,
        }
    }
}

static DOSAGE_FREQUENCIES: Lazy<IndexMap<&'static str, DosageFrequency>> = Lazy::new(|| {
    [
        DosageFrequency::new("OD", "Once daily", 1.0),
        DosageFrequency::new("BD", "Twice daily", 2.0),
        DosageFrequency::new("TDS", "Three times daily", 3.0),
        DosageFrequency::new("QDS", "Four times daily", 4.0),
        DosageFrequency::new("Q4H", "Every 4 hours", 6.0),
        DosageFrequency::new("Q6H", "Every 6 hours", 4.0),
        DosageFrequency::new("Q8H", "Every 8 hours", 3.0),
        DosageFrequency::new("Q12H", "Every 12 hours", 2.0),
        DosageFrequency::new("NOCTE", "At night", 1.0),
        DosageFrequency::new(PRN, "As needed", 0.0),
        DosageFrequency::new(WEEKLY, "Once weekly", 1.0 / 7.0),
        DosageFrequency::new(MONTHLY, "Once monthly", 1.0 / 30.0),
    ]
    .into_iter()
    .map(|frequency| (frequency.code, frequency))
    .collect()
});

/// All frequency codes, in table order
pub fn dosage_frequencies() -> impl Iterator<Item = &'static DosageFrequency> {
    DOSAGE_FREQUENCIES.values()
}

/// Look up a frequency code exactly as written in the table
pub fn find_frequency(code: &str) -> Option<&'static DosageFrequency> {
    DOSAGE_FREQUENCIES.get(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_and_size() {
        let codes: Vec<&str> = dosage_frequencies().map(|f| f.code).collect();
        assert_eq!(codes.len(), 12);
        assert_eq!(codes.first(), Some(&"OD"));
        assert_eq!(codes.last(), Some(&MONTHLY));
    }

    #[test]
    fn test_find_frequency_is_exact() {
        assert_eq!(find_frequency("BD").map(|f| f.doses_per_day), Some(2.0));
        assert!(find_frequency("bd").is_none());
        assert!(find_frequency(" Q8H ").is_none());
        assert!(find_frequency("UNKNOWN").is_none());
    }

    #[test]
    fn test_irregular_rates() {
        assert_eq!(find_frequency(PRN).unwrap().doses_per_day, 0.0);
        assert!(find_frequency(WEEKLY).unwrap().doses_per_day < 1.0);
    }
}
