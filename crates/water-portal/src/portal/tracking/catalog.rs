use std::collections::HashMap;

use chrono::NaiveDate;

use super::domain::{TrackingEvent, TrackingKind, TrackingRecord, TrackingStatus};
use crate::portal::grievances::{Grievance, GrievanceStatus};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    #[error("Please enter a Tracking ID")]
    InputMissing,
    #[error("No application or grievance found for tracking ID {0}")]
    NotFound(String),
}

/// Static dictionary of trackable records keyed by upper-cased tracking ID.
#[derive(Debug, Clone, Default)]
pub struct TrackingCatalog {
    records: HashMap<String, TrackingRecord>,
}

impl TrackingCatalog {
    /// Sample applications plus every sample grievance.
    pub fn standard(grievances: &[Grievance]) -> Self {
        let mut catalog = Self::default();
        for record in sample_applications() {
            catalog.insert(record);
        }
        for grievance in grievances {
            catalog.insert(grievance_record(grievance));
        }
        catalog
    }

    pub fn insert(&mut self, record: TrackingRecord) {
        self.records
            .insert(record.tracking_id.to_ascii_uppercase(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Classify by prefix, then probe. No partial or fuzzy matching.
    pub fn track(&self, tracking_id: &str) -> Result<TrackingRecord, TrackingError> {
        let normalized = tracking_id.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(TrackingError::InputMissing);
        }

        let Some(kind) = TrackingKind::classify(&normalized) else {
            return Err(TrackingError::NotFound(normalized));
        };

        match self.records.get(&normalized) {
            Some(record) if record.kind == kind => Ok(record.clone()),
            _ => Err(TrackingError::NotFound(normalized)),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn event(on: NaiveDate, message: &str) -> TrackingEvent {
    TrackingEvent {
        date: on,
        message: message.to_string(),
    }
}

fn application(
    tracking_id: &str,
    kind: TrackingKind,
    status: TrackingStatus,
    title: &str,
    timeline: Vec<TrackingEvent>,
) -> TrackingRecord {
    let submitted_on = timeline.last().map(|event| event.date).unwrap_or_default();
    let last_update = timeline.first().map(|event| event.date).unwrap_or_default();
    TrackingRecord {
        tracking_id: tracking_id.to_string(),
        kind,
        status,
        status_label: status.label(),
        title: title.to_string(),
        submitted_on,
        last_update,
        timeline,
    }
}

fn sample_applications() -> Vec<TrackingRecord> {
    vec![
        application(
            "APP-2025-001",
            TrackingKind::Application,
            TrackingStatus::UnderReview,
            "New water connection - Residential, 15mm",
            vec![
                event(date(2025, 12, 12), "Documents under verification by ward office"),
                event(date(2025, 12, 10), "Application submitted"),
            ],
        ),
        application(
            "APP-2025-002",
            TrackingKind::Application,
            TrackingStatus::Approved,
            "New water connection - Commercial, 25mm",
            vec![
                event(date(2025, 12, 9), "Application approved. Connection work will be scheduled."),
                event(date(2025, 12, 4), "Site inspection completed"),
                event(date(2025, 12, 1), "Application submitted"),
            ],
        ),
        application(
            "WNC-2025-180652",
            TrackingKind::FirstConnection,
            TrackingStatus::UnderReview,
            "First water connection - Residential",
            vec![
                event(date(2025, 12, 17), "Property details verified against directory"),
                event(date(2025, 12, 16), "Application submitted"),
            ],
        ),
    ]
}

fn grievance_record(grievance: &Grievance) -> TrackingRecord {
    let status = match grievance.status {
        GrievanceStatus::Open => TrackingStatus::Open,
        GrievanceStatus::InProgress => TrackingStatus::InProgress,
        GrievanceStatus::Resolved => TrackingStatus::Resolved,
        GrievanceStatus::Rejected => TrackingStatus::Rejected,
    };

    TrackingRecord {
        tracking_id: grievance.id.clone(),
        kind: TrackingKind::Grievance,
        status,
        status_label: status.label(),
        title: format!("{} - {}", grievance.category, grievance.subject),
        submitted_on: grievance.submitted_date,
        last_update: grievance.last_update,
        timeline: grievance
            .updates
            .iter()
            .map(|update| TrackingEvent {
                date: update.date,
                message: format!("{}: {}", update.author, update.message),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::grievances::sample_grievances;

    fn catalog() -> TrackingCatalog {
        TrackingCatalog::standard(&sample_grievances())
    }

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(
            TrackingKind::classify("APP-2025-001"),
            Some(TrackingKind::Application)
        );
        assert_eq!(
            TrackingKind::classify("wnc-2025-180652"),
            Some(TrackingKind::FirstConnection)
        );
        assert_eq!(
            TrackingKind::classify("GRV-2025-023"),
            Some(TrackingKind::Grievance)
        );
        assert_eq!(TrackingKind::classify("XYZ-001"), None);
    }

    #[test]
    fn application_ids_resolve_to_application_records() {
        let record = catalog().track("APP-2025-001").expect("sample present");
        assert_eq!(record.kind, TrackingKind::Application);
        assert_eq!(record.status_label, "Under Review");

        let approved = catalog().track("app-2025-002").expect("sample present");
        assert_eq!(approved.status, TrackingStatus::Approved);
        assert_eq!(approved.submitted_on, date(2025, 12, 1));
        assert_eq!(approved.last_update, date(2025, 12, 9));
    }

    #[test]
    fn grievance_ids_resolve_to_grievance_records() {
        let record = catalog().track(" GRV-2025-023 ").expect("sample present");
        assert_eq!(record.kind, TrackingKind::Grievance);
        assert_eq!(record.status, TrackingStatus::InProgress);
        assert_eq!(record.timeline.len(), 3);
    }

    #[test]
    fn first_connection_ids_resolve() {
        let record = catalog().track("WNC-2025-180652").expect("sample present");
        assert_eq!(record.kind, TrackingKind::FirstConnection);
        assert_eq!(record.status, TrackingStatus::UnderReview);
    }

    #[test]
    fn malformed_or_absent_ids_are_not_found() {
        let catalog = catalog();
        assert_eq!(
            catalog.track("XYZ-001"),
            Err(TrackingError::NotFound("XYZ-001".to_string()))
        );
        assert!(matches!(
            catalog.track("APP-2025-999"),
            Err(TrackingError::NotFound(_))
        ));
        assert!(matches!(
            catalog.track("APP-2025"),
            Err(TrackingError::NotFound(_))
        ));
        assert_eq!(catalog.track(""), Err(TrackingError::InputMissing));
    }

    #[test]
    fn standard_catalog_holds_applications_and_grievances() {
        assert_eq!(catalog().len(), 6);
    }
}
