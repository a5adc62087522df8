use serde::Serialize;

use crate::entities::AssessmentStatus;

/// Display classes for an assessment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentStyle {
    pub color: &'static str,
    pub background: &'static str,
}

/// Map a status to its text and background classes.
///
/// Kept apart from the classifiers; only rendering callers use it.
pub fn status_to_style(status: AssessmentStatus) -> AssessmentStyle {
    let (color, background) = match status {
        AssessmentStatus::Normal => ("text-green-600", "bg-green-50"),
        AssessmentStatus::Low => ("text-yellow-600", "bg-yellow-50"),
        AssessmentStatus::High => ("text-orange-600", "bg-orange-50"),
        AssessmentStatus::CriticalLow | AssessmentStatus::CriticalHigh => ("text-red-600", "bg-red-50"),
    };

    AssessmentStyle { color, background }
}
