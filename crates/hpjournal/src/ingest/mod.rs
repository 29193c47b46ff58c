mod row;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::journal::{ArtworkRecord, RecordError, Registry};

#[derive(Debug)]
pub enum TrackerImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingLocator { line: u64 },
    InvalidScore { line: u64, value: String },
    Record { line: u64, source: RecordError },
}

impl std::fmt::Display for TrackerImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerImportError::Io(err) => write!(f, "failed to read tracker export: {}", err),
            TrackerImportError::Csv(err) => write!(f, "invalid tracker CSV data: {}", err),
            TrackerImportError::MissingLocator { line } => {
                write!(f, "line {}: row has no thumb code", line)
            }
            TrackerImportError::InvalidScore { line, value } => {
                write!(f, "line {}: HP value {:?} is not a number", line, value)
            }
            TrackerImportError::Record { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl std::error::Error for TrackerImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TrackerImportError::Io(err) => Some(err),
            TrackerImportError::Csv(err) => Some(err),
            TrackerImportError::Record { source, .. } => Some(source),
            TrackerImportError::MissingLocator { .. } | TrackerImportError::InvalidScore { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for TrackerImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TrackerImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct TrackerCsvImporter;

impl TrackerCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Registry, TrackerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a tracker export into a registry of collections.
    ///
    /// The first line is a header and is skipped. Each data row carries
    /// thumb code, description, HP score, activity, then any number of
    /// collection names; the record is built once and shared into every
    /// collection the row names. Any malformed row aborts the whole import
    /// with its 1-based line number, leaving no partial registry behind.
    pub fn from_reader<R: Read>(reader: R) -> Result<Registry, TrackerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut registry = Registry::new();
        let mut records_seen = 0usize;

        for record in csv_reader.records() {
            let record = record?;
            if row::is_end_of_data(&record) {
                break;
            }

            let line = record.position().map_or(0, |p| p.line());
            let parsed = row::parse_row(&record, line)?;
            let artwork = ArtworkRecord::shared(
                parsed.locator,
                parsed.rationale,
                parsed.score,
                parsed.subcategory,
            )
            .map_err(|source| TrackerImportError::Record { line, source })?;

            for name in &parsed.names {
                registry.insert(name).add_record(Arc::clone(&artwork));
            }
            records_seen += 1;
        }

        info!(
            collections = registry.len(),
            records = records_seen,
            "tracker export ingested"
        );
        Ok(registry)
    }
}
