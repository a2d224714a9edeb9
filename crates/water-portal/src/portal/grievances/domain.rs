use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrievanceStatus {
    Open,
    InProgress,
    Resolved,
    Rejected,
}

impl GrievanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            GrievanceStatus::Open => "Open",
            GrievanceStatus::InProgress => "In Progress",
            GrievanceStatus::Resolved => "Resolved",
            GrievanceStatus::Rejected => "Rejected",
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, GrievanceStatus::Open | GrievanceStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrievancePriority {
    Low,
    Medium,
    High,
}

/// One entry of a grievance's history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrievanceUpdate {
    pub date: NaiveDate,
    pub author: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grievance {
    pub id: String,
    pub connection_id: String,
    pub category: String,
    pub subject: String,
    pub description: String,
    pub status: GrievanceStatus,
    pub priority: GrievancePriority,
    pub submitted_date: NaiveDate,
    pub last_update: NaiveDate,
    pub assigned_to: String,
    pub updates: Vec<GrievanceUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_resolution: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Grievance {
    /// Case-insensitive substring search over ID, subject, and category.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.id.to_lowercase().contains(&needle)
            || self.subject.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Listing filter mirroring the tracker tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrievanceTab {
    #[default]
    All,
    Open,
    Resolved,
    Rejected,
}

impl GrievanceTab {
    pub fn admits(self, status: GrievanceStatus) -> bool {
        match self {
            GrievanceTab::All => true,
            GrievanceTab::Open => status.is_active(),
            GrievanceTab::Resolved => status == GrievanceStatus::Resolved,
            GrievanceTab::Rejected => status == GrievanceStatus::Rejected,
        }
    }
}

/// Complaint as submitted from the new-grievance dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGrievance {
    #[serde(default)]
    pub connection_id: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Option<GrievancePriority>,
}
