use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Errors raised while reading a raw measurement.
///
/// These never escape the classifiers: every variant is turned into an
/// unclassified assessment so callers always get a usable result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    /// The value could not be parsed as a number
    #[error("'{0}' is not a numeric value")]
    NotNumeric(String),

    /// The value parsed but is NaN or infinite
    #[error("{0} is not a finite number")]
    NotFinite(f64),

    /// The parameter name has no reference range
    #[error("No reference range for parameter '{0}'")]
    UnknownParameter(String),

    /// A blood pressure reading did not match `<systolic>/<diastolic>`
    #[error("'{0}' is not a systolic/diastolic reading")]
    InvalidBloodPressure(String),
}

/// A raw reading as supplied by the caller: either a number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasurementValue {
    Number(f64),
    Text(String),
}

impl MeasurementValue {
    /// Read the value as a finite number.
    ///
    /// Text is trimmed before parsing; anything that does not parse to a
    /// finite `f64` is rejected.
    pub fn as_number(&self) -> Result<f64, MeasurementError> {
        let number = match self {
            MeasurementValue::Number(number) => *number,
            MeasurementValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| MeasurementError::NotNumeric(text.clone()))?,
        };

        if number.is_finite() {
            Ok(number)
        } else {
            Err(MeasurementError::NotFinite(number))
        }
    }

    /// Blank text counts as "not supplied". Numbers are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, MeasurementValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for MeasurementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasurementValue::Number(number) => write!(f, "{}", number),
            MeasurementValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for MeasurementValue {
    fn from(value: f64) -> Self {
        MeasurementValue::Number(value)
    }
}

impl From<i32> for MeasurementValue {
    fn from(value: i32) -> Self {
        MeasurementValue::Number(f64::from(value))
    }
}

impl From<&str> for MeasurementValue {
    fn from(value: &str) -> Self {
        MeasurementValue::Text(value.to_string())
    }
}

impl From<String> for MeasurementValue {
    fn from(value: String) -> Self {
        MeasurementValue::Text(value)
    }
}

/// Physiological parameters that have a row in the reference range table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Parameter {
    #[serde(rename = "systolic")]
    Systolic,
    #[serde(rename = "diastolic")]
    Diastolic,
    #[serde(rename = "temperature")]
    Temperature,
    #[serde(rename = "pulse")]
    Pulse,
    #[serde(rename = "respiratoryRate")]
    RespiratoryRate,
    /// Body mass index derived from weight and height
    #[serde(rename = "bmi", alias = "weightBmi")]
    WeightBmi,
    #[serde(rename = "oxygenSaturation")]
    OxygenSaturation,
}

impl Parameter {
    /// Every parameter, in reference table order
    pub const ALL: [Parameter; 7] = [
        Parameter::Systolic,
        Parameter::Diastolic,
        Parameter::Temperature,
        Parameter::Pulse,
        Parameter::RespiratoryRate,
        Parameter::WeightBmi,
        Parameter::OxygenSaturation,
    ];

    /// The name used for lookups and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Systolic => "systolic",
            Parameter::Diastolic => "diastolic",
            Parameter::Temperature => "temperature",
            Parameter::Pulse => "pulse",
            Parameter::RespiratoryRate => "respiratoryRate",
            Parameter::WeightBmi => "bmi",
            Parameter::OxygenSaturation => "oxygenSaturation",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = MeasurementError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "systolic" => Ok(Parameter::Systolic),
            "diastolic" => Ok(Parameter::Diastolic),
            "temperature" => Ok(Parameter::Temperature),
            "pulse" => Ok(Parameter::Pulse),
            "respiratoryRate" => Ok(Parameter::RespiratoryRate),
            "bmi" | "weightBmi" => Ok(Parameter::WeightBmi),
            "oxygenSaturation" => Ok(Parameter::OxygenSaturation),
            other => Err(MeasurementError::UnknownParameter(other.to_string())),
        }
    }
}

/// Patient details that accompany a measurement set.
///
/// `age` and `gender` are carried for range stratification but do not
/// currently change any classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    pub age: Option<u32>,
    pub gender: Option<String>,
    /// Height in metres, or centimetres when greater than 3
    pub height: Option<f64>,
}

impl PatientContext {
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_accepts_numbers_and_numeric_text() {
        assert_eq!(MeasurementValue::from(72).as_number(), Ok(72.0));
        assert_eq!(MeasurementValue::from(" 36.6 ").as_number(), Ok(36.6));
    }

    #[test]
    fn test_as_number_rejects_garbage_and_non_finite() {
        assert!(matches!(
            MeasurementValue::from("abc").as_number(),
            Err(MeasurementError::NotNumeric(_))
        ));
        assert!(matches!(
            MeasurementValue::from("NaN").as_number(),
            Err(MeasurementError::NotFinite(_))
        ));
        assert!(matches!(
            MeasurementValue::from(f64::INFINITY).as_number(),
            Err(MeasurementError::NotFinite(_))
        ));
    }

    #[test]
    fn test_is_empty() {
        assert!(MeasurementValue::from("").is_empty());
        assert!(MeasurementValue::from("   ").is_empty());
        assert!(!MeasurementValue::from("0").is_empty());
        assert!(!MeasurementValue::from(0.0).is_empty());
    }

    #[test]
    fn test_untagged_deserialization() {
        let number: MeasurementValue = serde_json::from_str("98").unwrap();
        assert_eq!(number, MeasurementValue::Number(98.0));

        let text: MeasurementValue = serde_json::from_str("\"120/80\"").unwrap();
        assert_eq!(text, MeasurementValue::Text("120/80".to_string()));
    }

    #[test]
    fn test_parameter_names() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.as_str().parse::<Parameter>(), Ok(parameter));
        }
        assert_eq!("weightBmi".parse::<Parameter>(), Ok(Parameter::WeightBmi));
        assert_eq!(
            "glucose".parse::<Parameter>(),
            Err(MeasurementError::UnknownParameter("glucose".to_string()))
        );
    }

    #[test]
    fn test_parameter_serde_alias() {
        let parameter: Parameter = serde_json::from_str("\"weightBmi\"").unwrap();
        assert_eq!(parameter, Parameter::WeightBmi);
        assert_eq!(serde_json::to_string(&parameter).unwrap(), "\"bmi\"");
    }
}
