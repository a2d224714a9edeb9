//! Grievance tracker backed by sample complaints.

pub mod catalog;
pub mod domain;
pub mod router;
pub mod service;

pub use catalog::sample_grievances;
pub use domain::{
    Grievance, GrievancePriority, GrievanceStatus, GrievanceTab, GrievanceUpdate, NewGrievance,
};
pub use router::grievance_router;
pub use service::{GrievanceDesk, GrievanceError, GrievanceListing, GrievanceReceipt, TabCounts};
