//! Domain layer health check functionality
//! Reports whether the static clinical tables are loaded and complete

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{dosage_frequencies, reference_ranges, Parameter};

pub const REFERENCE_RANGES_COMPONENT: &str = "reference_ranges";
pub const DOSAGE_FREQUENCIES_COMPONENT: &str = "dosage_frequencies";

/// One reference range per parameter
pub const EXPECTED_REFERENCE_RANGE_ROWS: usize = Parameter::ALL.len();
/// OD, BD, TDS, QDS, Q4H, Q6H, Q8H, Q12H, NOCTE, PRN, WEEKLY, MONTHLY
pub const EXPECTED_DOSAGE_FREQUENCY_ROWS: usize = 12;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    pub status: ComponentStatus,
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
    pub checked_at: DateTime<Utc>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Check a static table against the number of rows it must hold
pub fn check_table(rows: usize, expected: usize) -> HealthComponent {
    if rows == 0 {
        HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some("Table is empty".to_string()),
        }
    } else if rows < expected {
        HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(format!("{} of {} rows loaded", rows, expected)),
        }
    } else {
        HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        }
    }
}

/// The worst component status decides the overall status
pub fn overall_status<'a>(components: impl IntoIterator<Item = &'a HealthComponent>) -> SystemStatus {
    let mut status = SystemStatus::Healthy;
    for component in components {
        match component.status {
            ComponentStatus::Unhealthy => return SystemStatus::Unhealthy,
            ComponentStatus::Degraded => status = SystemStatus::Degraded,
            ComponentStatus::Healthy => {}
        }
    }
    status
}

/// Get overall system health
pub async fn get_system_health() -> SystemHealth {
    let components: HashMap<String, HealthComponent> = vec![
        (
            REFERENCE_RANGES_COMPONENT.to_string(),
            check_table(reference_ranges().count(), EXPECTED_REFERENCE_RANGE_ROWS),
        ),
        (
            DOSAGE_FREQUENCIES_COMPONENT.to_string(),
            check_table(dosage_frequencies().count(), EXPECTED_DOSAGE_FREQUENCY_ROWS),
        ),
    ]
    .into_iter()
    .collect();

    SystemHealth {
        status: overall_status(components.values()),
        components,
        checked_at: Utc::now(),
    }
}

/// Health service over the static clinical tables
#[derive(Debug, Default)]
pub struct TableHealthService;

#[async_trait]
impl HealthServiceTrait for TableHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        get_system_health().await
    }
}

/// Create the default health service
pub fn create_default_health_service() -> impl HealthServiceTrait {
    TableHealthService
}
