//! Quarterly meter-reading submission with simulated photo reading.

pub mod domain;
pub mod reader;
pub mod router;
pub mod service;

pub use domain::{
    sample_history, ConsumerProfile, HistoricalReading, ReadingStatus, CURRENT_QUARTER,
    PREVIOUS_READING,
};
pub use reader::{DetectedReading, MeterReader, SimulatedMeterReader};
pub use router::readings_router;
pub use service::{MeterReadingDesk, ReadingError, ReadingReceipt, ReadingSubmission};
