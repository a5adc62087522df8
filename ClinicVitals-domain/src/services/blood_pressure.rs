use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::{Assessment, AssessmentStatus, MeasurementError, MeasurementValue};

/// Reference band shown for every blood pressure assessment
pub const BLOOD_PRESSURE_RANGE: &str = "90-120/60-80 mmHg";

pub const INVALID_FORMAT: &str = "Invalid format";

static BLOOD_PRESSURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s*$")
        .expect("blood pressure pattern is valid")
});

/// Blood pressure stage, following the AHA categories plus hypotension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Systolic < 90 or diastolic < 60
    Hypotension,

    /// Systolic 90-119 and diastolic 60-79
    Normal,

    /// Systolic 120-129 and diastolic < 80
    Elevated,

    /// Systolic 130-139 or diastolic 80-89
    Hypertension1,

    /// Systolic ≥ 140 or diastolic ≥ 90
    Hypertension2,

    /// Systolic ≥ 180 or diastolic ≥ 120
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    pub fn status(&self) -> AssessmentStatus {
        match self {
            BloodPressureCategory::Hypotension => AssessmentStatus::Low,
            BloodPressureCategory::Normal => AssessmentStatus::Normal,
            BloodPressureCategory::Elevated
            | BloodPressureCategory::Hypertension1
            | BloodPressureCategory::Hypertension2 => AssessmentStatus::High,
            BloodPressureCategory::HypertensiveCrisis => AssessmentStatus::CriticalHigh,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BloodPressureCategory::Hypotension => "Hypotension",
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension1 => "Stage 1 Hypertension",
            BloodPressureCategory::Hypertension2 => "Stage 2 Hypertension",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
        }
    }
}

/// Categorize blood pressure based on measurements.
///
/// Stages overlap at their edges, so the order of checks is significant:
/// the first matching stage wins.
pub fn categorize_blood_pressure(systolic: f64, diastolic: f64) -> BloodPressureCategory {
    if systolic >= 180.0 || diastolic >= 120.0 {
        BloodPressureCategory::HypertensiveCrisis
    } else if systolic >= 140.0 || diastolic >= 90.0 {
        BloodPressureCategory::Hypertension2
    } else if systolic >= 130.0 || diastolic >= 80.0 {
        BloodPressureCategory::Hypertension1
    } else if (120.0..130.0).contains(&systolic) && diastolic < 80.0 {
        BloodPressureCategory::Elevated
    } else if systolic < 90.0 || diastolic < 60.0 {
        BloodPressureCategory::Hypotension
    } else {
        BloodPressureCategory::Normal
    }
}

/// Split a `"<systolic>/<diastolic>"` reading into its two numbers
pub fn parse_blood_pressure(value: &str) -> Result<(f64, f64), MeasurementError> {
    let invalid = || MeasurementError::InvalidBloodPressure(value.to_string());

    let captures = BLOOD_PRESSURE_PATTERN.captures(value).ok_or_else(invalid)?;
    let systolic = captures[1].parse::<f64>().map_err(|_| invalid())?;
    let diastolic = captures[2].parse::<f64>().map_err(|_| invalid())?;

    Ok((systolic, diastolic))
}

/// Stage a blood pressure reading such as `"135/85"`.
///
/// The range label is always [`BLOOD_PRESSURE_RANGE`] and the parsed value
/// is the original text.
pub fn classify_blood_pressure(value: &str) -> Assessment {
    assess_blood_pressure(MeasurementValue::Text(value.to_string()))
}

/// Stage a blood pressure reading given as either text or a number.
///
/// Numbers never match the systolic/diastolic pattern and come back as
/// "Invalid format".
pub fn assess_blood_pressure(raw_value: MeasurementValue) -> Assessment {
    let text = raw_value.to_string();

    match parse_blood_pressure(&text) {
        Ok((systolic, diastolic)) => {
            let category = categorize_blood_pressure(systolic, diastolic);
            Assessment::new(
                raw_value,
                MeasurementValue::Text(text),
                category.status(),
                category.message(),
                BLOOD_PRESSURE_RANGE,
            )
        }
        Err(err) => {
            debug!(error = %err, "Blood pressure reading not staged");
            Assessment::unclassified(raw_value, INVALID_FORMAT, BLOOD_PRESSURE_RANGE)
        }
    }
}
