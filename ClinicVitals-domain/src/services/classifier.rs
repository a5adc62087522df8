use tracing::debug;

use crate::entities::{
    reference_range, Assessment, AssessmentStatus, MeasurementValue, Parameter, ReferenceRange,
    NOT_APPLICABLE,
};

/// Below `min * CRITICAL_LOW_FACTOR` is critically low
pub const CRITICAL_LOW_FACTOR: f64 = 0.8;

/// Above `max * CRITICAL_HIGH_FACTOR` is critically high
pub const CRITICAL_HIGH_FACTOR: f64 = 1.2;

pub const INVALID_VALUE: &str = "Invalid value";
pub const NO_REFERENCE_RANGE: &str = "No reference range available";

/// Classify a single reading against the reference table.
///
/// Never fails: unparseable values come back as "Invalid value" and unknown
/// parameter names as "No reference range available", both with status
/// `Normal` and range `"N/A"`.
pub fn classify(parameter: &str, value: impl Into<MeasurementValue>) -> Assessment {
    let raw_value = value.into();

    let number = match raw_value.as_number() {
        Ok(number) => number,
        Err(err) => {
            debug!(parameter, error = %err, "Measurement is not classifiable");
            return Assessment::unclassified(raw_value, INVALID_VALUE, NOT_APPLICABLE);
        }
    };

    let range = match parameter.parse::<Parameter>() {
        Ok(parameter) => reference_range(parameter),
        Err(err) => {
            debug!(error = %err, "No reference range for measurement");
            None
        }
    };

    match range {
        Some(range) => classify_against(range, raw_value, number),
        None => Assessment::unclassified(raw_value, NO_REFERENCE_RANGE, NOT_APPLICABLE),
    }
}

/// Typed variant of [`classify`] for callers that already hold a `Parameter`
pub fn classify_parameter(parameter: Parameter, value: impl Into<MeasurementValue>) -> Assessment {
    classify(parameter.as_str(), value)
}

/// Classify an already-parsed number against a specific range
pub fn classify_against(range: &ReferenceRange, raw_value: MeasurementValue, value: f64) -> Assessment {
    let status = if range.contains(value) {
        AssessmentStatus::Normal
    } else {
        threshold_status(range.min, range.max, value)
    };
    Assessment::new(
        raw_value,
        MeasurementValue::Number(value),
        status,
        status.label(),
        range.label(),
    )
}

/// Compare a value against optional inclusive bounds.
///
/// A missing bound is skipped entirely. Values exactly on a bound are normal.
pub fn threshold_status(min: Option<f64>, max: Option<f64>, value: f64) -> AssessmentStatus {
    if let Some(min) = min {
        if value < min {
            return if value < min * CRITICAL_LOW_FACTOR {
                AssessmentStatus::CriticalLow
            } else {
                AssessmentStatus::Low
            };
        }
    }

    if let Some(max) = max {
        if value > max {
            return if value > max * CRITICAL_HIGH_FACTOR {
                AssessmentStatus::CriticalHigh
            } else {
                AssessmentStatus::High
            };
        }
    }

    AssessmentStatus::Normal
}
