use chrono::NaiveDate;

use super::domain::{Grievance, GrievancePriority, GrievanceStatus, GrievanceUpdate};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap_or_default()
}

fn update(day: u32, author: &str, message: &str) -> GrievanceUpdate {
    GrievanceUpdate {
        date: date(12, day),
        author: author.to_string(),
        message: message.to_string(),
    }
}

/// Sample complaints filed against the demo consumer's connections.
pub fn sample_grievances() -> Vec<Grievance> {
    vec![
        Grievance {
            id: "GRV-2025-023".to_string(),
            connection_id: "CON-2025-001".to_string(),
            category: "Billing Issue".to_string(),
            subject: "Incorrect meter reading in bill".to_string(),
            description: "The meter reading shown in last month bill is incorrect. Actual reading is 1200 but bill shows 1350.".to_string(),
            status: GrievanceStatus::InProgress,
            priority: GrievancePriority::High,
            submitted_date: date(12, 15),
            last_update: date(12, 18),
            assigned_to: "Officer - Priya Sharma".to_string(),
            updates: vec![
                update(18, "Priya Sharma", "We have verified your complaint and found the discrepancy. A field officer will visit your property for meter verification within 2 days."),
                update(16, "System", "Grievance assigned to Water Tax Officer - Ward 5"),
                update(15, "Rajesh Kumar", "Grievance submitted"),
            ],
            expected_resolution: Some(date(12, 25)),
            resolved_date: None,
            resolution: None,
        },
        Grievance {
            id: "GRV-2025-018".to_string(),
            connection_id: "CON-2025-002".to_string(),
            category: "Water Supply".to_string(),
            subject: "Low water pressure".to_string(),
            description: "Water pressure is very low during morning hours (6 AM to 9 AM). Unable to fill overhead tank.".to_string(),
            status: GrievanceStatus::Resolved,
            priority: GrievancePriority::Medium,
            submitted_date: date(12, 10),
            last_update: date(12, 14),
            assigned_to: "Officer - Amit Patel".to_string(),
            updates: vec![
                update(14, "Amit Patel", "Issue resolved. Main pipeline pressure adjusted. Please check and confirm."),
                update(12, "Amit Patel", "Field inspection completed. Issue identified in main pipeline pressure. Maintenance scheduled for Dec 14."),
                update(10, "System", "Grievance assigned to Water Supply Officer - Ward 8"),
                update(10, "Rajesh Kumar", "Grievance submitted"),
            ],
            expected_resolution: None,
            resolved_date: Some(date(12, 14)),
            resolution: Some("Main pipeline pressure issue was identified and fixed. Water pressure has been restored to normal levels.".to_string()),
        },
        Grievance {
            id: "GRV-2025-015".to_string(),
            connection_id: "CON-2025-001".to_string(),
            category: "Connection".to_string(),
            subject: "Water leakage at meter point".to_string(),
            description: "There is continuous water leakage at the meter connection point. Water is being wasted.".to_string(),
            status: GrievanceStatus::Rejected,
            priority: GrievancePriority::High,
            submitted_date: date(12, 5),
            last_update: date(12, 8),
            assigned_to: "Officer - Priya Sharma".to_string(),
            updates: vec![
                update(8, "System", "Grievance closed after confirmation"),
                update(7, "Priya Sharma", "Meter connection replaced. Issue resolved. Please verify."),
                update(6, "Priya Sharma", "Field team dispatched for immediate repair"),
                update(5, "System", "Grievance marked as urgent and assigned"),
                update(5, "Rajesh Kumar", "Grievance submitted"),
            ],
            expected_resolution: None,
            resolved_date: Some(date(12, 7)),
            resolution: Some("Meter connection replaced. Leakage stopped. No charges for wasted water.".to_string()),
        },
    ]
}
