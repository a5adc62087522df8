use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::entities::{
    reference_ranges, Assessment, MeasurementValue, Parameter, PatientContext, ReferenceRange,
    NOT_APPLICABLE,
};
use crate::services::blood_pressure::{assess_blood_pressure, classify_blood_pressure};
use crate::services::bmi::assess_bmi;
use crate::services::classifier::{classify, classify_parameter, INVALID_VALUE};

pub const BLOOD_PRESSURE_KEY: &str = "bloodPressure";
pub const WEIGHT_KEY: &str = "weight";
pub const BMI_KEY: &str = "bmi";

// Keys classified against the reference table, in output order
const THRESHOLD_KEYS: [(&str, Parameter); 4] = [
    ("temperature", Parameter::Temperature),
    ("pulse", Parameter::Pulse),
    ("respiratoryRate", Parameter::RespiratoryRate),
    ("oxygenSaturation", Parameter::OxygenSaturation),
];

/// Raw readings keyed by measurement name
pub type MeasurementSet = IndexMap<String, MeasurementValue>;

/// Assessments keyed by measurement name, in interpretation order
pub type Interpretation = IndexMap<String, Assessment>;

/// Assess one named measurement.
///
/// `bloodPressure` is staged as a systolic/diastolic pair; every other name
/// goes through the reference table.
pub fn assess_measurement(key: &str, value: MeasurementValue) -> Assessment {
    if key == BLOOD_PRESSURE_KEY {
        assess_blood_pressure(value)
    } else {
        classify(key, value)
    }
}

fn present<'a>(measurements: &'a MeasurementSet, key: &str) -> Option<&'a MeasurementValue> {
    measurements.get(key).filter(|value| !value.is_empty())
}

/// Interpret a full measurement set.
///
/// Only keys that are present and non-blank produce an entry. `weight`
/// yields a `bmi` entry, and only when the context carries a height.
/// Age and gender are accepted but do not change any outcome.
pub fn interpret(measurements: &MeasurementSet, context: &PatientContext) -> Interpretation {
    trace!(
        age = ?context.age,
        gender = ?context.gender,
        "Interpreting measurement set"
    );

    let mut interpretation = Interpretation::new();

    if let Some(value) = present(measurements, BLOOD_PRESSURE_KEY) {
        interpretation.insert(BLOOD_PRESSURE_KEY.to_string(), assess_blood_pressure(value.clone()));
    }

    for (key, parameter) in THRESHOLD_KEYS {
        if let Some(value) = present(measurements, key) {
            interpretation.insert(key.to_string(), classify_parameter(parameter, value.clone()));
        }
    }

    if let Some(weight) = present(measurements, WEIGHT_KEY) {
        match context.height {
            Some(height) => {
                let assessment = match weight.as_number() {
                    Ok(weight_kg) => assess_bmi(weight.clone(), weight_kg, height),
                    Err(_) => Assessment::unclassified(weight.clone(), INVALID_VALUE, NOT_APPLICABLE),
                };
                interpretation.insert(BMI_KEY.to_string(), assessment);
            }
            None => debug!("Weight supplied without height; BMI skipped"),
        }
    }

    debug!(assessed = interpretation.len(), "Measurement set interpreted");
    interpretation
}

/// Trait for vital sign interpretation operations
pub trait VitalsServiceTrait {
    /// Assess a single named measurement
    fn classify(&self, parameter: &str, value: MeasurementValue) -> Assessment;

    /// Stage a `"<systolic>/<diastolic>"` reading
    fn classify_blood_pressure(&self, value: &str) -> Assessment;

    /// Interpret a full measurement set
    fn interpret(&self, measurements: &MeasurementSet, context: &PatientContext) -> Interpretation;

    /// Reference ranges in table order
    fn reference_ranges(&self) -> Vec<&'static ReferenceRange>;
}

/// Stateless vitals service backed by the static reference table
#[derive(Debug, Clone, Copy, Default)]
pub struct VitalsService;

impl VitalsService {
    pub fn new() -> Self {
        Self
    }
}

impl VitalsServiceTrait for VitalsService {
    fn classify(&self, parameter: &str, value: MeasurementValue) -> Assessment {
        assess_measurement(parameter, value)
    }

    fn classify_blood_pressure(&self, value: &str) -> Assessment {
        classify_blood_pressure(value)
    }

    fn interpret(&self, measurements: &MeasurementSet, context: &PatientContext) -> Interpretation {
        interpret(measurements, context)
    }

    fn reference_ranges(&self) -> Vec<&'static ReferenceRange> {
        reference_ranges().collect()
    }
}

/// Create the default vitals service
pub fn create_default_vitals_service() -> impl VitalsServiceTrait + Send + Sync {
    VitalsService::new()
}
