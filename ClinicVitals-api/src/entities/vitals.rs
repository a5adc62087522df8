use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_vitals_domain::entities::{
    Assessment, AssessmentStatus, MeasurementValue, Parameter, PatientContext, PopulationGroup,
    ReferenceRange,
};
use clinic_vitals_domain::services::{status_to_style, Interpretation, MeasurementSet};

/// Display classes for an assessment status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicAssessmentStyle {
    /// Text colour class
    pub color: String,

    /// Background class
    pub background: String,
}

/// Public representation of a measurement assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicAssessment {
    /// The value exactly as supplied (number or string)
    #[schema(value_type = Object)]
    pub raw_value: MeasurementValue,

    /// The value that was evaluated
    #[schema(value_type = Object)]
    pub parsed_value: MeasurementValue,

    /// Clinical status
    pub status: AssessmentStatus,

    /// Human-readable label, e.g. "Stage 1 Hypertension"
    pub message: String,

    /// Reference band used for the judgement
    pub normal_range: String,

    /// Presentation hints derived from the status
    pub style: PublicAssessmentStyle,
}

/// Request payload for classifying a single measurement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    /// Measurement name, e.g. "pulse" or "bloodPressure"
    pub parameter: String,

    /// Reading as a number or a string
    #[schema(value_type = Object)]
    pub value: MeasurementValue,
}

/// Request payload for interpreting a measurement set
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterpretRequest {
    /// Readings keyed by name: bloodPressure, temperature, pulse,
    /// respiratoryRate, oxygenSaturation, weight. A `null` reading is skipped.
    #[schema(value_type = Object)]
    pub measurements: IndexMap<String, Option<MeasurementValue>>,

    /// Patient age in years
    pub age: Option<u32>,

    /// Patient gender
    pub gender: Option<String>,

    /// Height in metres, or centimetres when greater than 3
    pub height: Option<f64>,
}

/// Assessments keyed by measurement name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterpretResponse {
    #[schema(value_type = Object)]
    pub assessments: IndexMap<String, PublicAssessment>,
}

/// Public representation of a reference range row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicReferenceRange {
    pub parameter: Parameter,

    /// Lower bound, absent when open
    pub min: Option<f64>,

    /// Upper bound, absent when open
    pub max: Option<f64>,

    pub unit: String,

    pub population_group: PopulationGroup,

    /// Display label, e.g. "60-100 bpm"
    pub label: String,
}

/// Convert a domain assessment to its public form
pub fn convert_to_public_assessment(assessment: Assessment) -> PublicAssessment {
    let style = status_to_style(assessment.status);

    PublicAssessment {
        raw_value: assessment.raw_value,
        parsed_value: assessment.parsed_value,
        status: assessment.status,
        message: assessment.message,
        normal_range: assessment.normal_range,
        style: PublicAssessmentStyle {
            color: style.color.to_string(),
            background: style.background.to_string(),
        },
    }
}

/// Convert a domain interpretation to the public response
pub fn convert_to_public_interpretation(interpretation: Interpretation) -> InterpretResponse {
    InterpretResponse {
        assessments: interpretation
            .into_iter()
            .map(|(key, assessment)| (key, convert_to_public_assessment(assessment)))
            .collect(),
    }
}

/// Convert a reference range row to its public form
pub fn convert_to_public_range(range: &ReferenceRange) -> PublicReferenceRange {
    PublicReferenceRange {
        parameter: range.parameter,
        min: range.min,
        max: range.max,
        unit: range.unit.to_string(),
        population_group: range.population_group,
        label: range.label(),
    }
}

impl InterpretRequest {
    /// Split the request into the domain measurement set and patient context
    pub fn into_domain(self) -> (MeasurementSet, PatientContext) {
        let context = PatientContext {
            age: self.age,
            gender: self.gender,
            height: self.height,
        };
        let measurements = self
            .measurements
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect();
        (measurements, context)
    }
}
