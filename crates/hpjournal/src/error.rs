use crate::config::ConfigError;
use crate::ingest::TrackerImportError;
use crate::journal::{ScheduleError, TierError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Import(TrackerImportError),
    Schedule(ScheduleError),
    Tier(TierError),
    UnknownCollection { name: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Schedule(err) => write!(f, "schedule error: {}", err),
            AppError::Tier(err) => write!(f, "tier error: {}", err),
            AppError::UnknownCollection { name } => {
                write!(f, "no collection named {:?} in this export", name)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Schedule(err) => Some(err),
            AppError::Tier(err) => Some(err),
            AppError::UnknownCollection { .. } => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TrackerImportError> for AppError {
    fn from(value: TrackerImportError) -> Self {
        Self::Import(value)
    }
}

impl From<ScheduleError> for AppError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

impl From<TierError> for AppError {
    fn from(value: TierError) -> Self {
        Self::Tier(value)
    }
}
