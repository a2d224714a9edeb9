use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a tracking ID refers to, encoded in its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingKind {
    /// `APP-YYYY-NNN`, filed by a logged-in consumer.
    Application,
    /// `WNC-YYYY-NNNNNN`, a first water connection.
    FirstConnection,
    /// `GRV-YYYY-NNN`
    Grievance,
}

impl TrackingKind {
    /// Prefix probe only; the remainder of the ID is not validated.
    pub fn classify(tracking_id: &str) -> Option<Self> {
        let normalized = tracking_id.trim().to_ascii_uppercase();
        if normalized.starts_with("APP-") {
            Some(Self::Application)
        } else if normalized.starts_with("WNC-") {
            Some(Self::FirstConnection)
        } else if normalized.starts_with("GRV-") {
            Some(Self::Grievance)
        } else {
            None
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrackingKind::Application => "Connection Application",
            TrackingKind::FirstConnection => "First Connection",
            TrackingKind::Grievance => "Grievance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingStatus {
    Submitted,
    UnderReview,
    Approved,
    Open,
    InProgress,
    Resolved,
    Rejected,
}

impl TrackingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            TrackingStatus::Submitted => "Submitted",
            TrackingStatus::UnderReview => "Under Review",
            TrackingStatus::Approved => "Approved",
            TrackingStatus::Open => "Open",
            TrackingStatus::InProgress => "In Progress",
            TrackingStatus::Resolved => "Resolved",
            TrackingStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    pub date: NaiveDate,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingRecord {
    pub tracking_id: String,
    pub kind: TrackingKind,
    pub status: TrackingStatus,
    pub status_label: &'static str,
    pub title: String,
    pub submitted_on: NaiveDate,
    pub last_update: NaiveDate,
    /// Newest first.
    pub timeline: Vec<TrackingEvent>,
}
