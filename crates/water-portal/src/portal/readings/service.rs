use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{sample_history, ConsumerProfile, HistoricalReading, CURRENT_QUARTER};
use super::reader::{DetectedReading, MeterReader};
use crate::portal::billing::{
    compute_bill, BillResult, ConnectionType, InvalidMeterReading, InvalidReadingOrder, MeterMode,
    MeterReading, RateSchedule,
};
use crate::portal::uploads::{UploadDescriptor, UploadPolicy, UploadRejection};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadingError {
    #[error("Please fill all required fields ({field} is missing)")]
    InputMissing { field: &'static str },
    #[error("{field} must be a non-negative number (found {value:?})")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    InvalidReadingOrder(#[from] InvalidReadingOrder),
    #[error(transparent)]
    Upload(#[from] UploadRejection),
}

impl From<InvalidMeterReading> for ReadingError {
    fn from(value: InvalidMeterReading) -> Self {
        match value {
            InvalidMeterReading::Negative { field, value } => ReadingError::InvalidNumber {
                field,
                value: value.to_string(),
            },
            InvalidMeterReading::OutOfOrder(err) => ReadingError::InvalidReadingOrder(err),
        }
    }
}

/// Reading form as submitted. The quarter and previous reading are fixed server side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingSubmission {
    #[serde(default)]
    pub current_reading: Option<String>,
    #[serde(default)]
    pub reading_date: Option<NaiveDate>,
    /// Meter photo or supporting document.
    #[serde(default)]
    pub attachment: Option<UploadDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingReceipt {
    pub consumer_id: String,
    pub meter_number: String,
    pub quarter: String,
    pub previous_reading: Decimal,
    pub current_reading: Decimal,
    pub consumed_units: Decimal,
    pub reading_date: NaiveDate,
    /// Metered charge for the quarter at the consumer's category rate.
    pub estimate: Option<BillResult>,
    pub message: String,
}

/// Reading desk for the logged-in consumer.
pub struct MeterReadingDesk<M> {
    profile: ConsumerProfile,
    previous_reading: u32,
    history: Vec<HistoricalReading>,
    reader: Arc<M>,
    photos: UploadPolicy,
    schedule: RateSchedule,
}

impl<M> MeterReadingDesk<M>
where
    M: MeterReader + 'static,
{
    pub fn new(profile: ConsumerProfile, previous_reading: u32, reader: Arc<M>) -> Self {
        Self {
            profile,
            previous_reading,
            history: sample_history(),
            reader,
            photos: UploadPolicy::meter_photos(),
            schedule: RateSchedule::standard(),
        }
    }

    pub fn profile(&self) -> &ConsumerProfile {
        &self.profile
    }

    pub fn history(&self) -> &[HistoricalReading] {
        &self.history
    }

    pub fn previous_reading(&self) -> u32 {
        self.previous_reading
    }

    pub fn quarter(&self) -> &'static str {
        CURRENT_QUARTER
    }

    /// Check the photo against the 5 MiB image/PDF policy, then hand it to the reader.
    pub async fn read_photo(&self, photo: &UploadDescriptor) -> Result<DetectedReading, ReadingError> {
        self.photos.check(photo)?;
        Ok(self.reader.read(photo, self.previous_reading).await)
    }

    pub fn submit(&self, submission: &ReadingSubmission) -> Result<ReadingReceipt, ReadingError> {
        let raw = submission
            .current_reading
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(ReadingError::InputMissing {
                field: "current_reading",
            })?;
        let reading_date = submission.reading_date.ok_or(ReadingError::InputMissing {
            field: "reading_date",
        })?;

        let current =
            MeterReading::parse_value(raw).map_err(|err| ReadingError::InvalidNumber {
                field: "current_reading",
                value: err.raw,
            })?;
        let previous = Decimal::from(self.previous_reading);
        let reading = MeterReading::new(previous, current)?;

        if let Some(attachment) = &submission.attachment {
            self.photos.check(attachment)?;
        }

        let estimate = ConnectionType::parse(&self.profile.category).and_then(|connection_type| {
            compute_bill(
                &self.schedule,
                connection_type,
                MeterMode::Metered,
                Some(previous),
                Some(current),
            )
            .ok()
        });

        tracing::info!(
            consumer = %self.profile.consumer_id,
            current = %current,
            consumed = %reading.consumed_units(),
            "meter reading accepted"
        );

        Ok(ReadingReceipt {
            consumer_id: self.profile.consumer_id.clone(),
            meter_number: self.profile.meter_number.clone(),
            quarter: CURRENT_QUARTER.to_string(),
            previous_reading: previous,
            current_reading: current,
            consumed_units: reading.consumed_units(),
            reading_date,
            estimate,
            message: "Meter reading submitted successfully! Your reading has been recorded and will be processed shortly.".to_string(),
        })
    }
}
