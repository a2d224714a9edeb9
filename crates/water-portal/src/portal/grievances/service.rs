use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Serialize;

use super::catalog::sample_grievances;
use super::domain::{Grievance, GrievancePriority, GrievanceStatus, GrievanceTab, NewGrievance};
use crate::portal::simulation::{simulate_latency, RandomSource};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrievanceError {
    #[error("{field} is required")]
    InputMissing { field: &'static str },
    #[error("grievance {0} not found")]
    NotFound(String),
}

/// Per-tab totals over the searched list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub open: usize,
    pub resolved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrievanceListing {
    pub counts: TabCounts,
    pub grievances: Vec<Grievance>,
}

/// Acknowledgement for a new complaint. The complaint itself is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrievanceReceipt {
    pub id: String,
    pub status: GrievanceStatus,
    pub priority: GrievancePriority,
    pub submitted_date: NaiveDate,
    pub message: String,
}

pub struct GrievanceDesk {
    grievances: Vec<Grievance>,
    random: Arc<dyn RandomSource>,
    submit_delay: Duration,
}

impl GrievanceDesk {
    pub fn new(grievances: Vec<Grievance>, random: Arc<dyn RandomSource>, submit_delay: Duration) -> Self {
        Self {
            grievances,
            random,
            submit_delay,
        }
    }

    pub fn with_samples(random: Arc<dyn RandomSource>, submit_delay: Duration) -> Self {
        Self::new(sample_grievances(), random, submit_delay)
    }

    pub fn list(&self, query: &str, tab: GrievanceTab) -> GrievanceListing {
        let searched: Vec<&Grievance> = self
            .grievances
            .iter()
            .filter(|grievance| grievance.matches(query))
            .collect();

        let mut counts = TabCounts {
            all: searched.len(),
            ..TabCounts::default()
        };
        for grievance in &searched {
            match grievance.status {
                GrievanceStatus::Open | GrievanceStatus::InProgress => counts.open += 1,
                GrievanceStatus::Resolved => counts.resolved += 1,
                GrievanceStatus::Rejected => counts.rejected += 1,
            }
        }

        let grievances = searched
            .into_iter()
            .filter(|grievance| tab.admits(grievance.status))
            .cloned()
            .collect();

        GrievanceListing { counts, grievances }
    }

    pub fn get(&self, id: &str) -> Result<Grievance, GrievanceError> {
        let id = id.trim();
        self.grievances
            .iter()
            .find(|grievance| grievance.id.eq_ignore_ascii_case(id))
            .cloned()
            .ok_or_else(|| GrievanceError::NotFound(id.to_string()))
    }

    pub fn samples(&self) -> &[Grievance] {
        &self.grievances
    }

    pub async fn submit(
        &self,
        grievance: NewGrievance,
        today: NaiveDate,
    ) -> Result<GrievanceReceipt, GrievanceError> {
        for (field, value) in [
            ("category", &grievance.category),
            ("subject", &grievance.subject),
            ("description", &grievance.description),
        ] {
            if value.trim().is_empty() {
                return Err(GrievanceError::InputMissing { field });
            }
        }

        simulate_latency(self.submit_delay).await;

        let id = format!("GRV-2025-{:03}", self.random.next_in(100, 1000));
        tracing::info!(grievance = %id, category = %grievance.category, "grievance received");

        Ok(GrievanceReceipt {
            message: format!(
                "Grievance {id} submitted. Use it to track progress of your complaint."
            ),
            id,
            status: GrievanceStatus::Open,
            priority: grievance.priority.unwrap_or(GrievancePriority::Medium),
            submitted_date: today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::simulation::SeededRandom;

    fn desk() -> GrievanceDesk {
        GrievanceDesk::with_samples(Arc::new(SeededRandom::new(11)), Duration::ZERO)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 20).expect("valid date")
    }

    #[test]
    fn tabs_partition_the_samples() {
        let listing = desk().list("", GrievanceTab::All);
        assert_eq!(
            listing.counts,
            TabCounts {
                all: 3,
                open: 1,
                resolved: 1,
                rejected: 1
            }
        );

        let open = desk().list("", GrievanceTab::Open);
        assert_eq!(open.grievances.len(), 1);
        assert_eq!(open.grievances[0].id, "GRV-2025-023");
    }

    #[test]
    fn search_matches_id_subject_or_category() {
        let desk = desk();
        assert_eq!(desk.list("grv-2025-018", GrievanceTab::All).grievances.len(), 1);
        assert_eq!(desk.list("LEAKAGE", GrievanceTab::All).grievances.len(), 1);
        assert_eq!(desk.list("billing", GrievanceTab::All).grievances.len(), 1);
        let none = desk.list("sewage", GrievanceTab::All);
        assert!(none.grievances.is_empty());
        assert_eq!(none.counts, TabCounts::default());
    }

    #[test]
    fn search_and_tab_combine() {
        let listing = desk().list("water", GrievanceTab::Resolved);
        assert_eq!(listing.counts.all, 2);
        assert_eq!(listing.grievances.len(), 1);
        assert_eq!(listing.grievances[0].id, "GRV-2025-018");
    }

    #[test]
    fn get_is_case_insensitive() {
        let grievance = desk().get("grv-2025-023").expect("sample present");
        assert_eq!(grievance.updates.len(), 3);
        assert_eq!(
            desk().get("GRV-2024-001"),
            Err(GrievanceError::NotFound("GRV-2024-001".to_string()))
        );
    }

    #[tokio::test]
    async fn submit_mints_id_without_adding_to_list() {
        let desk = desk();
        let receipt = desk
            .submit(
                NewGrievance {
                    connection_id: Some("CON-2025-001".to_string()),
                    category: "Water Quality".to_string(),
                    subject: "Muddy water".to_string(),
                    description: "Brown water every morning".to_string(),
                    priority: None,
                },
                today(),
            )
            .await
            .expect("valid grievance");

        assert!(receipt.id.starts_with("GRV-2025-"));
        assert_eq!(receipt.id.len(), "GRV-2025-000".len());
        assert_eq!(receipt.status, GrievanceStatus::Open);
        assert_eq!(receipt.priority, GrievancePriority::Medium);
        assert_eq!(desk.samples().len(), 3);
        assert!(desk.get(&receipt.id).is_err());
    }

    #[tokio::test]
    async fn submit_requires_subject() {
        let result = desk()
            .submit(
                NewGrievance {
                    category: "Billing Issue".to_string(),
                    description: "Bill too high".to_string(),
                    ..NewGrievance::default()
                },
                today(),
            )
            .await;
        assert_eq!(
            result,
            Err(GrievanceError::InputMissing { field: "subject" })
        );
    }
}
