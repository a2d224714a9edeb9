use chrono::NaiveDate;
use serde::Serialize;

/// Last verified reading on the demo consumer's meter.
pub const PREVIOUS_READING: u32 = 377;

/// Billing quarter open for submission. Not editable by the citizen.
pub const CURRENT_QUARTER: &str = "01/10/2025-31/12/2025";

/// Consumer shown on the reading form of a logged-in citizen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsumerProfile {
    pub name: String,
    pub address: String,
    pub zone: String,
    pub ward: String,
    pub section: String,
    pub consumer_id: String,
    pub connection_number: String,
    pub meter_number: String,
    pub number_of_connections: u32,
    pub property_number: String,
    pub category: String,
}

impl ConsumerProfile {
    pub fn sample() -> Self {
        Self {
            name: "Ram Sharma".to_string(),
            address: "Kelwadi Bai Clinic".to_string(),
            zone: "A4".to_string(),
            ward: "586".to_string(),
            section: "Residential".to_string(),
            consumer_id: "62200".to_string(),
            connection_number: "456789".to_string(),
            meter_number: "M15-00288".to_string(),
            number_of_connections: 15,
            property_number: "A1-1".to_string(),
            category: "Residential".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    Pending,
    Verified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalReading {
    pub quarter: String,
    pub current_reading: u32,
    pub previous_reading: u32,
    pub consumption: u32,
    pub date: NaiveDate,
    pub status: ReadingStatus,
}

fn historical(quarter: &str, previous: u32, current: u32, date: NaiveDate) -> HistoricalReading {
    HistoricalReading {
        quarter: quarter.to_string(),
        current_reading: current,
        previous_reading: previous,
        consumption: current.saturating_sub(previous),
        date,
        status: ReadingStatus::Verified,
    }
}

/// Last three quarters, newest first.
pub fn sample_history() -> Vec<HistoricalReading> {
    let day = |month| NaiveDate::from_ymd_opt(2024, month, 15).unwrap_or_default();
    vec![
        historical("Q3 2024", 250, 377, day(12)),
        historical("Q2 2024", 180, 250, day(9)),
        historical("Q1 2024", 100, 180, day(6)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_chains_into_the_previous_reading() {
        let history = sample_history();
        assert_eq!(history[0].current_reading, PREVIOUS_READING);
        assert_eq!(
            history.iter().map(|entry| entry.consumption).collect::<Vec<_>>(),
            vec![127, 70, 80]
        );
        for pair in history.windows(2) {
            assert_eq!(pair[0].previous_reading, pair[1].current_reading);
        }
    }
}
