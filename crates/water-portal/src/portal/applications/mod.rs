//! New water connection applications: validation, document checks, and number minting.

pub mod domain;
pub mod intake;
pub mod router;

pub use domain::{ConnectionApplication, ConnectionSize, DocumentSlot, FormVariant};
pub use intake::{ApplicationError, ApplicationIntake, ApplicationReceipt};
pub use router::application_router;
