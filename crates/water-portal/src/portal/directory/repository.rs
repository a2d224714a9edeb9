use std::io::Read;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use super::domain::PropertyRecord;
use crate::portal::simulation::simulate_latency;

const BUILT_IN_DIRECTORY: &str = include_str!("data/properties.csv");

/// Port for the municipal property register. The bundled implementation is a static
/// table behind an artificial delay; a networked register can replace it unchanged.
#[async_trait]
pub trait PropertyDirectory: Send + Sync {
    async fn find(&self, query: &str) -> Option<PropertyRecord>;
}

/// Failure loading a directory export.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryLoadError {
    #[error("failed to read property directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid property directory CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// In-memory register scanned front to back; the first matching row wins.
#[derive(Debug, Clone)]
pub struct StaticPropertyDirectory {
    records: Vec<PropertyRecord>,
    latency: Duration,
}

impl StaticPropertyDirectory {
    pub fn new(records: Vec<PropertyRecord>, latency: Duration) -> Self {
        Self { records, latency }
    }

    /// The four sample properties shipped with the portal.
    pub fn built_in(latency: Duration) -> Self {
        match parse_records(BUILT_IN_DIRECTORY.as_bytes()) {
            Ok(records) => Self::new(records, latency),
            Err(err) => {
                tracing::error!(error = %err, "bundled property directory is unreadable");
                Self::new(Vec::new(), latency)
            }
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P, latency: Duration) -> Result<Self, DirectoryLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, latency)
    }

    pub fn from_reader<R: Read>(reader: R, latency: Duration) -> Result<Self, DirectoryLoadError> {
        Ok(Self::new(parse_records(reader)?, latency))
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn find_now(&self, query: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.matches(query))
    }
}

#[async_trait]
impl PropertyDirectory for StaticPropertyDirectory {
    async fn find(&self, query: &str) -> Option<PropertyRecord> {
        simulate_latency(self.latency).await;
        self.find_now(query).cloned()
    }
}

fn parse_records<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<PropertyRecord>()
        .collect::<Result<Vec<_>, _>>()
}
