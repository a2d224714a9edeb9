use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::portal::simulation::{simulate_latency, RandomSource};
use crate::portal::uploads::UploadDescriptor;

/// Value read off a meter photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectedReading {
    pub reading: u32,
    pub confidence_percent: u32,
}

/// Port for reading the dial from a meter photo. Implementations receive the last
/// verified reading so they can sanity-check what they detect.
#[async_trait]
pub trait MeterReader: Send + Sync {
    async fn read(&self, photo: &UploadDescriptor, previous_reading: u32) -> DetectedReading;
}

/// Stand-in for a real OCR backend: waits, then reports `previous + [50, 100)` with
/// confidence in `[90, 100)`.
pub struct SimulatedMeterReader {
    random: Arc<dyn RandomSource>,
    delay: Duration,
}

impl SimulatedMeterReader {
    pub fn new(random: Arc<dyn RandomSource>, delay: Duration) -> Self {
        Self { random, delay }
    }
}

#[async_trait]
impl MeterReader for SimulatedMeterReader {
    async fn read(&self, photo: &UploadDescriptor, previous_reading: u32) -> DetectedReading {
        simulate_latency(self.delay).await;

        let consumption = self.random.next_in(50, 100);
        let detected = DetectedReading {
            reading: previous_reading + consumption,
            confidence_percent: self.random.next_in(90, 100),
        };
        tracing::info!(
            file = %photo.file_name,
            reading = detected.reading,
            confidence = detected.confidence_percent,
            "meter photo read"
        );
        detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::simulation::SeededRandom;

    fn photo() -> UploadDescriptor {
        UploadDescriptor {
            file_name: "meter.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes: 800_000,
        }
    }

    #[tokio::test]
    async fn detection_stays_within_simulated_bounds() {
        let reader = SimulatedMeterReader::new(Arc::new(SeededRandom::new(21)), Duration::ZERO);
        for _ in 0..50 {
            let detected = reader.read(&photo(), 377).await;
            assert!((427..477).contains(&detected.reading));
            assert!((90..100).contains(&detected.confidence_percent));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn detection_waits_for_the_configured_delay() {
        let reader =
            SimulatedMeterReader::new(Arc::new(SeededRandom::new(2)), Duration::from_millis(2500));
        let started = tokio::time::Instant::now();
        reader.read(&photo(), 100).await;
        assert!(started.elapsed() >= Duration::from_millis(2500));
    }
}
