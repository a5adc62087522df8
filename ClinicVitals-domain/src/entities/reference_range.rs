use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::assessment::NOT_APPLICABLE;
use super::measurement::Parameter;

/// Population a reference range applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PopulationGroup {
    Adult,
}

/// Normal numeric bounds for one parameter.
///
/// A missing bound means the range is open on that side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRange {
    pub parameter: Parameter,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: &'static str,
    pub population_group: PopulationGroup,
}

impl ReferenceRange {
    const fn adult(
        parameter: Parameter,
        min: Option<f64>,
        max: Option<f64>,
        unit: &'static str,
    ) -> Self {
        Self {
            parameter,
            min,
            max,
            unit,
            population_group: PopulationGroup::Adult,
        }
    }

    /// Display string of the band, e.g. `"60-100 bpm"` or `"≥95 %"`
    pub fn label(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                format!("{}-{} {}", format_bound(min), format_bound(max), self.unit)
            }
            (Some(min), None) => format!("≥{} {}", format_bound(min), self.unit),
            (None, Some(max)) => format!("≤{} {}", format_bound(max), self.unit),
            (None, None) => NOT_APPLICABLE.to_string(),
        }
    }

    /// Inclusive on both bounds
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

// Whole numbers print without a decimal point
fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

static REFERENCE_RANGES: Lazy<IndexMap<Parameter, ReferenceRange>> = Lazy::new(|| {
    [
        ReferenceRange::adult(Parameter::Systolic, Some(90.0), Some(120.0), "mmHg"),
        ReferenceRange::adult(Parameter::Diastolic, Some(60.0), Some(80.0), "mmHg"),
        ReferenceRange::adult(Parameter::Temperature, Some(36.1), Some(37.2), "°C"),
        ReferenceRange::adult(Parameter::Pulse, Some(60.0), Some(100.0), "bpm"),
        ReferenceRange::adult(Parameter::RespiratoryRate, Some(12.0), Some(20.0), "breaths/min"),
        ReferenceRange::adult(Parameter::WeightBmi, Some(18.5), Some(24.9), "kg/m²"),
        ReferenceRange::adult(Parameter::OxygenSaturation, Some(95.0), None, "%"),
    ]
    .into_iter()
    .map(|range| (range.parameter, range))
    .collect()
});

/// All reference ranges, in table order
pub fn reference_ranges() -> impl Iterator<Item = &'static ReferenceRange> {
    REFERENCE_RANGES.values()
}

/// The reference range for a parameter
pub fn reference_range(parameter: Parameter) -> Option<&'static ReferenceRange> {
    REFERENCE_RANGES.get(&parameter)
}
