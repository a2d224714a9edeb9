use serde::{Deserialize, Serialize};

use super::domain::PropertyRecord;

/// Editable property fields of a connection application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyField {
    Zone,
    Ward,
    PropertyNumber,
    PlotFlat,
    OwnerName,
    Mobile,
    Email,
    SocietyName,
    BuildingType,
    Locality,
    Pincode,
    Address,
}

impl PropertyField {
    /// Identity fields frozen once a directory record has been applied.
    pub const LOCKED_AFTER_AUTOFILL: [PropertyField; 2] = [PropertyField::Zone, PropertyField::Ward];

    pub fn locks_after_autofill(self) -> bool {
        Self::LOCKED_AFTER_AUTOFILL.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0:?} was filled from the property directory and cannot be edited")]
    FieldLocked(PropertyField),
}

/// Per-session property section of a connection form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyForm {
    pub zone: String,
    pub ward: String,
    pub property_number: String,
    pub plot_flat: String,
    pub owner_name: String,
    pub mobile: String,
    pub email: String,
    pub society_name: String,
    pub building_type: String,
    pub locality: String,
    pub pincode: String,
    pub address: String,
    pub autofilled: bool,
}

impl PropertyForm {
    /// Copy every directory attribute into the form and lock the identity fields.
    pub fn autofill(&mut self, record: &PropertyRecord) {
        self.zone = record.zone.clone();
        self.ward = record.ward.clone();
        self.property_number = record.property_number.clone();
        self.plot_flat = record.plot_flat.clone();
        self.owner_name = record.owner_name.clone();
        self.mobile = record.mobile_number.clone();
        self.email = record.email.clone();
        self.society_name = record.society_name.clone();
        self.building_type = record.building_type.clone();
        self.locality = record.locality.clone();
        self.pincode = record.pincode.clone();
        self.address = record.address.clone();
        self.autofilled = true;
    }

    /// Apply a lookup result. A miss leaves every field as it was so the citizen can
    /// keep typing by hand.
    pub fn apply_lookup(&mut self, found: Option<&PropertyRecord>) {
        match found {
            Some(record) => self.autofill(record),
            None => self.autofilled = false,
        }
    }

    pub fn is_locked(&self, field: PropertyField) -> bool {
        self.autofilled && field.locks_after_autofill()
    }

    pub fn set(&mut self, field: PropertyField, value: impl Into<String>) -> Result<(), FormError> {
        if self.is_locked(field) {
            return Err(FormError::FieldLocked(field));
        }

        let slot = match field {
            PropertyField::Zone => &mut self.zone,
            PropertyField::Ward => &mut self.ward,
            PropertyField::PropertyNumber => &mut self.property_number,
            PropertyField::PlotFlat => &mut self.plot_flat,
            PropertyField::OwnerName => &mut self.owner_name,
            PropertyField::Mobile => &mut self.mobile,
            PropertyField::Email => &mut self.email,
            PropertyField::SocietyName => &mut self.society_name,
            PropertyField::BuildingType => &mut self.building_type,
            PropertyField::Locality => &mut self.locality,
            PropertyField::Pincode => &mut self.pincode,
            PropertyField::Address => &mut self.address,
        };
        *slot = value.into();
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
