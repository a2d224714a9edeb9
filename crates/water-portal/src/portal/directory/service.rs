use std::sync::Arc;

use serde::Serialize;

use super::domain::PropertyRecord;
use super::form::PropertyField;
use super::repository::PropertyDirectory;

pub const MANUAL_ENTRY_MESSAGE: &str =
    "Property/Consumer not found. Please enter details manually.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter Property No, Consumer ID, or Mobile Number")]
    InputMissing,
    #[error("Property/Consumer not found. Please enter details manually.")]
    NotFound { query: String },
}

/// Successful lookup with the form fields it freezes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyAutofill {
    pub property: PropertyRecord,
    pub locked_fields: Vec<PropertyField>,
}

/// Facade over the directory port used by the connection forms.
pub struct PropertyLookupService<D> {
    directory: Arc<D>,
}

impl<D> PropertyLookupService<D>
where
    D: PropertyDirectory + 'static,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    pub async fn lookup(&self, query: &str) -> Result<PropertyRecord, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::InputMissing);
        }

        match self.directory.find(query).await {
            Some(record) => {
                tracing::info!(property = %record.property_number, "property lookup hit");
                Ok(record)
            }
            None => {
                tracing::info!(query, "property lookup miss, manual entry allowed");
                Err(LookupError::NotFound {
                    query: query.to_string(),
                })
            }
        }
    }

    pub async fn autofill(&self, query: &str) -> Result<PropertyAutofill, LookupError> {
        let property = self.lookup(query).await?;
        Ok(PropertyAutofill {
            property,
            locked_fields: PropertyField::LOCKED_AFTER_AUTOFILL.to_vec(),
        })
    }
}
