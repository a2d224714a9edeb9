use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use super::domain::{ConnectionApplication, ConnectionSize, DocumentSlot, FormVariant};
use crate::portal::billing::{ConnectionType, MeterMode};
use crate::portal::directory::Zone;
use crate::portal::simulation::{simulate_latency, RandomSource};
use crate::portal::uploads::{UploadPolicy, UploadRejection};

/// Acknowledgement number shown by the full-page form for every submission.
pub const FULL_PAGE_APPLICATION_NUMBER: &str = "APP123456789";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicationError {
    #[error("{field} is required")]
    InputMissing { field: &'static str },
    #[error("{value:?} is not a valid {field}")]
    UnknownOption { field: &'static str, value: String },
    #[error("ward {ward} does not belong to zone {zone:?}")]
    WardOutsideZone { zone: Zone, ward: String },
    #[error("Please accept the declaration before submitting")]
    DeclarationRequired,
    #[error(transparent)]
    Upload(#[from] UploadRejection),
}

/// Result of a validated application. Nothing is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationReceipt {
    pub application_number: String,
    pub variant: FormVariant,
    pub owner_name: String,
    pub zone: Zone,
    pub ward: String,
    pub connection_category: ConnectionType,
    pub meter_mode: MeterMode,
    pub connection_size: ConnectionSize,
    pub documents_attached: Vec<DocumentSlot>,
    pub pending_documents: Vec<DocumentSlot>,
    pub message: String,
}

/// Fields of an application that survived validation.
struct ValidatedApplication {
    zone: Zone,
    connection_category: ConnectionType,
    meter_mode: MeterMode,
    connection_size: ConnectionSize,
}

pub struct ApplicationIntake {
    documents: UploadPolicy,
    random: Arc<dyn RandomSource>,
    submit_delay: Duration,
}

impl ApplicationIntake {
    pub fn new(random: Arc<dyn RandomSource>, submit_delay: Duration) -> Self {
        Self {
            documents: UploadPolicy::documents(),
            random,
            submit_delay,
        }
    }

    /// Validate, wait out the submit delay, then mint the application number.
    pub async fn submit(
        &self,
        application: ConnectionApplication,
    ) -> Result<ApplicationReceipt, ApplicationError> {
        let validated = self.validate(&application)?;

        simulate_latency(self.submit_delay).await;

        let application_number = match application.variant {
            FormVariant::Compact => format!("APP-2025-{}", self.random.next_in(1000, 10_000)),
            FormVariant::FullPage => FULL_PAGE_APPLICATION_NUMBER.to_string(),
        };
        tracing::info!(
            application = %application_number,
            category = %validated.connection_category,
            zone = ?validated.zone,
            "connection application minted"
        );

        Ok(ApplicationReceipt {
            message: format!(
                "Application {application_number} submitted successfully. Save this number to track your application."
            ),
            application_number,
            variant: application.variant,
            owner_name: application.property.owner_name.trim().to_string(),
            zone: validated.zone,
            ward: application.property.ward.trim().to_string(),
            connection_category: validated.connection_category,
            meter_mode: validated.meter_mode,
            connection_size: validated.connection_size,
            documents_attached: application.documents.keys().copied().collect(),
            pending_documents: application.pending_documents(),
        })
    }

    fn validate(
        &self,
        application: &ConnectionApplication,
    ) -> Result<ValidatedApplication, ApplicationError> {
        let property = &application.property;
        for (field, value) in [
            ("owner name", &property.owner_name),
            ("mobile", &property.mobile),
            ("address", &property.address),
            ("zone", &property.zone),
            ("ward", &property.ward),
            ("connection category", &application.connection_category),
            ("connection type", &application.connection_type),
            ("connection size", &application.connection_size),
        ] {
            if value.trim().is_empty() {
                return Err(ApplicationError::InputMissing { field });
            }
        }

        let zone = Zone::parse(&property.zone).ok_or_else(|| ApplicationError::UnknownOption {
            field: "zone",
            value: property.zone.clone(),
        })?;
        if !zone.contains_ward(&property.ward) {
            return Err(ApplicationError::WardOutsideZone {
                zone,
                ward: property.ward.trim().to_string(),
            });
        }

        let connection_category = ConnectionType::parse(&application.connection_category)
            .ok_or_else(|| ApplicationError::UnknownOption {
                field: "connection category",
                value: application.connection_category.clone(),
            })?;
        let meter_mode = MeterMode::parse(&application.connection_type).ok_or_else(|| {
            ApplicationError::UnknownOption {
                field: "connection type",
                value: application.connection_type.clone(),
            }
        })?;
        let connection_size = ConnectionSize::parse(&application.connection_size).ok_or_else(
            || ApplicationError::UnknownOption {
                field: "connection size",
                value: application.connection_size.clone(),
            },
        )?;

        for upload in application.documents.values() {
            self.documents.check(upload)?;
        }

        if !application.declaration_accepted {
            return Err(ApplicationError::DeclarationRequired);
        }

        Ok(ValidatedApplication {
            zone,
            connection_category,
            meter_mode,
            connection_size,
        })
    }
}
