use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::{Assessment, AssessmentStatus, MeasurementValue, NOT_APPLICABLE};
use crate::services::classifier::INVALID_VALUE;

pub const BMI_RANGE: &str = "18.5-24.9 BMI";

// Heights above this are taken to be centimetres
const MAX_HEIGHT_IN_METERS: f64 = 3.0;

/// BMI band, lower bound inclusive and upper bound exclusive
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiCategory {
    /// Below 16
    SeverelyUnderweight,
    /// 16 to 18.5
    Underweight,
    /// 18.5 to 25
    NormalWeight,
    /// 25 to 30
    Overweight,
    /// 30 to 35
    ObesityClass1,
    /// 35 to 40
    ObesityClass2,
    /// 40 and above
    ObesityClass3,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 16.0 {
            BmiCategory::SeverelyUnderweight
        } else if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else if bmi < 35.0 {
            BmiCategory::ObesityClass1
        } else if bmi < 40.0 {
            BmiCategory::ObesityClass2
        } else {
            BmiCategory::ObesityClass3
        }
    }

    pub fn status(&self) -> AssessmentStatus {
        match self {
            BmiCategory::SeverelyUnderweight => AssessmentStatus::CriticalLow,
            BmiCategory::Underweight => AssessmentStatus::Low,
            BmiCategory::NormalWeight => AssessmentStatus::Normal,
            BmiCategory::Overweight | BmiCategory::ObesityClass1 => AssessmentStatus::High,
            BmiCategory::ObesityClass2 | BmiCategory::ObesityClass3 => AssessmentStatus::CriticalHigh,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityClass1 => "Obesity Class I",
            BmiCategory::ObesityClass2 => "Obesity Class II",
            BmiCategory::ObesityClass3 => "Obesity Class III",
        }
    }
}

/// Normalize a height to metres; values above 3 are read as centimetres
pub fn height_in_meters(height: f64) -> f64 {
    if height > MAX_HEIGHT_IN_METERS {
        height / 100.0
    } else {
        height
    }
}

/// weight (kg) / height (m)²
pub fn calculate_bmi(weight_kg: f64, height: f64) -> f64 {
    let meters = height_in_meters(height);
    weight_kg / (meters * meters)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute and classify BMI from a weight in kilograms and a height in
/// metres or centimetres.
pub fn classify_bmi(weight_kg: f64, height: f64) -> Assessment {
    assess_bmi(MeasurementValue::Number(weight_kg), weight_kg, height)
}

/// Same as [`classify_bmi`], keeping the caller's raw weight value
pub(crate) fn assess_bmi(raw_weight: MeasurementValue, weight_kg: f64, height: f64) -> Assessment {
    let inputs_usable =
        weight_kg.is_finite() && weight_kg > 0.0 && height.is_finite() && height > 0.0;
    let bmi = calculate_bmi(weight_kg, height);

    if !inputs_usable || !bmi.is_finite() {
        debug!(weight_kg, height, "BMI could not be computed");
        return Assessment::unclassified(raw_weight, INVALID_VALUE, NOT_APPLICABLE);
    }

    // The band is chosen from the unrounded value
    let category = BmiCategory::from_bmi(bmi);
    Assessment::new(
        raw_weight,
        MeasurementValue::Number(round_to_tenth(bmi)),
        category.status(),
        category.message(),
        BMI_RANGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_normalization() {
        assert_eq!(height_in_meters(175.0), 1.75);
        assert_eq!(height_in_meters(1.75), 1.75);
        assert_eq!(height_in_meters(3.0), 3.0);
    }

    #[test]
    fn test_normal_weight_from_centimetres() {
        let assessment = classify_bmi(70.0, 175.0);
        assert_eq!(assessment.parsed_value, MeasurementValue::Number(22.9));
        assert_eq!(assessment.status, AssessmentStatus::Normal);
        assert_eq!(assessment.message, "Normal Weight");
        assert_eq!(assessment.normal_range, BMI_RANGE);
    }

    #[test]
    fn test_metres_and_centimetres_agree() {
        assert_eq!(classify_bmi(70.0, 1.75), classify_bmi(70.0, 175.0));
    }

    #[test]
    fn test_severely_underweight() {
        let assessment = classify_bmi(45.0, 170.0);
        assert_eq!(assessment.parsed_value, MeasurementValue::Number(15.6));
        assert_eq!(assessment.status, AssessmentStatus::CriticalLow);
        assert_eq!(assessment.message, "Severely Underweight");
    }

    #[test]
    fn test_cut_points_lower_bound_inclusive() {
        assert_eq!(BmiCategory::from_bmi(15.99), BmiCategory::SeverelyUnderweight);
        assert_eq!(BmiCategory::from_bmi(16.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::ObesityClass1);
        assert_eq!(BmiCategory::from_bmi(35.0), BmiCategory::ObesityClass2);
        assert_eq!(BmiCategory::from_bmi(40.0), BmiCategory::ObesityClass3);
    }

    #[test]
    fn test_obesity_statuses() {
        assert_eq!(classify_bmi(95.0, 1.75).message, "Obesity Class I");
        assert_eq!(classify_bmi(95.0, 1.75).status, AssessmentStatus::High);
        assert_eq!(classify_bmi(115.0, 1.75).status, AssessmentStatus::CriticalHigh);
        assert_eq!(classify_bmi(130.0, 1.75).message, "Obesity Class III");
    }

    #[test]
    fn test_zero_height_is_invalid() {
        let assessment = classify_bmi(70.0, 0.0);
        assert_eq!(assessment.message, INVALID_VALUE);
        assert_eq!(assessment.status, AssessmentStatus::Normal);
        assert_eq!(assessment.normal_range, NOT_APPLICABLE);
    }

    #[test]
    fn test_negative_height_is_invalid() {
        for height in [-1.75, -175.0] {
            let assessment = classify_bmi(70.0, height);
            assert_eq!(assessment.message, INVALID_VALUE, "{height}");
            assert_eq!(assessment.parsed_value, MeasurementValue::Number(70.0), "{height}");
            assert_eq!(assessment.normal_range, NOT_APPLICABLE, "{height}");
        }
    }

    #[test]
    fn test_non_positive_weight_is_invalid() {
        assert_eq!(classify_bmi(0.0, 1.75).message, INVALID_VALUE);
        assert_eq!(classify_bmi(-70.0, 1.75).message, INVALID_VALUE);
    }
}
