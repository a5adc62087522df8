use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::measurement::MeasurementValue;

/// Range label used when no reference band applies
pub const NOT_APPLICABLE: &str = "N/A";

/// Clinical status of a single measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// Within the reference range, or not classifiable
    Normal,

    /// Below the reference range
    Low,

    /// Above the reference range
    High,

    /// Below 80% of the lower bound
    CriticalLow,

    /// Above 120% of the upper bound
    CriticalHigh,
}

impl AssessmentStatus {
    /// Short label used as the message for threshold classifications
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentStatus::Normal => "Normal",
            AssessmentStatus::Low => "Low",
            AssessmentStatus::High => "High",
            AssessmentStatus::CriticalLow => "Critically Low",
            AssessmentStatus::CriticalHigh => "Critically High",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, AssessmentStatus::CriticalLow | AssessmentStatus::CriticalHigh)
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Interpretation of one measurement.
///
/// Built fresh for every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// The value exactly as supplied
    pub raw_value: MeasurementValue,

    /// The value that was evaluated: the parsed number, the rounded BMI,
    /// or the original text for blood pressure and unparseable input
    pub parsed_value: MeasurementValue,

    pub status: AssessmentStatus,

    /// Human-readable label, e.g. "Stage 1 Hypertension"
    pub message: String,

    /// Display string of the reference band used
    pub normal_range: String,
}

impl Assessment {
    pub fn new(
        raw_value: MeasurementValue,
        parsed_value: MeasurementValue,
        status: AssessmentStatus,
        message: impl Into<String>,
        normal_range: impl Into<String>,
    ) -> Self {
        Self {
            raw_value,
            parsed_value,
            status,
            message: message.into(),
            normal_range: normal_range.into(),
        }
    }

    /// An assessment for input that could not be classified.
    ///
    /// Status is `Normal` so the caller renders it neutrally; the message
    /// says why no judgement was made.
    pub fn unclassified(
        raw_value: MeasurementValue,
        message: impl Into<String>,
        normal_range: impl Into<String>,
    ) -> Self {
        Self::new(
            raw_value.clone(),
            raw_value,
            AssessmentStatus::Normal,
            message,
            normal_range,
        )
    }

    /// True for any status other than `Normal`
    pub fn is_abnormal(&self) -> bool {
        self.status != AssessmentStatus::Normal
    }
}
