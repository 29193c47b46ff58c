use std::env;
use std::fmt;

use crate::journal::{CapacitySchedule, ScheduleError, TierSpec};

/// Top-level configuration for the journal tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("HPJOURNAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let schedule = ScheduleConfig {
            initial_cap: read_capacity("HPJOURNAL_INITIAL_CAP", 75.0)?,
            average_cap: read_capacity("HPJOURNAL_AVERAGE_CAP", 250.0)?,
            dominant_cap: read_capacity("HPJOURNAL_DOMINANT_CAP", 300.0)?,
            extra_cap: read_capacity("HPJOURNAL_EXTRA_CAP", 100.0)?,
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            schedule,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Tier capacities, overridable per environment and again by CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub initial_cap: f64,
    pub average_cap: f64,
    pub dominant_cap: f64,
    pub extra_cap: f64,
}

impl ScheduleConfig {
    pub fn build(&self) -> Result<CapacitySchedule, ScheduleError> {
        CapacitySchedule::new(
            vec![
                TierSpec::new("Initial", self.initial_cap),
                TierSpec::new("Average", self.average_cap),
                TierSpec::new("Dominant", self.dominant_cap),
            ],
            "Extra Slot",
            self.extra_cap,
        )
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCapacity { var: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity { var, value } => {
                write!(f, "{} must be a positive number, got {:?}", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn read_capacity(var: &str, default: f64) -> Result<f64, ConfigError> {
    let raw = match env::var(var) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };

    match raw.trim().parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(parsed),
        _ => Err(ConfigError::InvalidCapacity {
            var: var.to_string(),
            value: raw,
        }),
    }
}
