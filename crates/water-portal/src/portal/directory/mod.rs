//! Property directory lookup used to pre-fill connection application forms.

pub mod domain;
pub mod form;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{PropertyRecord, Zone};
pub use form::{FormError, PropertyField, PropertyForm};
pub use repository::{DirectoryLoadError, PropertyDirectory, StaticPropertyDirectory};
pub use router::directory_router;
pub use service::{LookupError, PropertyLookupService, MANUAL_ENTRY_MESSAGE};
