//! Status tracking for applications, first connections, and grievances.

pub mod catalog;
pub mod domain;
pub mod router;

pub use catalog::{TrackingCatalog, TrackingError};
pub use domain::{TrackingEvent, TrackingKind, TrackingRecord, TrackingStatus};
pub use router::tracking_router;
