use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::portal::directory::PropertyForm;
use crate::portal::uploads::UploadDescriptor;

/// Which intake screen filed the application. They mint numbers differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVariant {
    /// Single-screen form; numbers are `APP-2025-NNNN`.
    #[default]
    Compact,
    /// Full-page form; always acknowledges with the literal `APP123456789`.
    FullPage,
}

/// Service pipe diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionSize {
    #[serde(rename = "15mm")]
    Mm15,
    #[serde(rename = "20mm")]
    Mm20,
    #[serde(rename = "25mm")]
    Mm25,
    #[serde(rename = "32mm")]
    Mm32,
    #[serde(rename = "40mm")]
    Mm40,
    #[serde(rename = "50mm")]
    Mm50,
}

impl ConnectionSize {
    pub const ALL: [ConnectionSize; 6] = [
        ConnectionSize::Mm15,
        ConnectionSize::Mm20,
        ConnectionSize::Mm25,
        ConnectionSize::Mm32,
        ConnectionSize::Mm40,
        ConnectionSize::Mm50,
    ];

    /// Accepts `15mm`, `15 mm` or a bare `15`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(' ', "");
        let millimetres = normalized.strip_suffix("mm").unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|size| size.millimetres().to_string() == millimetres)
    }

    pub const fn millimetres(self) -> u8 {
        match self {
            ConnectionSize::Mm15 => 15,
            ConnectionSize::Mm20 => 20,
            ConnectionSize::Mm25 => 25,
            ConnectionSize::Mm32 => 32,
            ConnectionSize::Mm40 => 40,
            ConnectionSize::Mm50 => 50,
        }
    }
}

/// Document slots on the application. Only the society NOC is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSlot {
    Aadhaar,
    AddressProof,
    PropertyDoc,
    Photo,
    TaxReceipt,
    SocietyNoc,
}

impl DocumentSlot {
    pub const ALL: [DocumentSlot; 6] = [
        DocumentSlot::Aadhaar,
        DocumentSlot::AddressProof,
        DocumentSlot::PropertyDoc,
        DocumentSlot::Photo,
        DocumentSlot::TaxReceipt,
        DocumentSlot::SocietyNoc,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DocumentSlot::Aadhaar => "Aadhaar Card",
            DocumentSlot::AddressProof => "Address Proof",
            DocumentSlot::PropertyDoc => "Property Doc",
            DocumentSlot::Photo => "Photo",
            DocumentSlot::TaxReceipt => "Tax Receipt",
            DocumentSlot::SocietyNoc => "Society NOC",
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, DocumentSlot::SocietyNoc)
    }
}

/// Everything a citizen enters on a connection form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionApplication {
    #[serde(default)]
    pub variant: FormVariant,
    #[serde(default)]
    pub property: PropertyForm,
    /// Residential (Domestic), Commercial or Industrial.
    #[serde(default)]
    pub connection_category: String,
    /// Meter or Non-Meter.
    #[serde(default)]
    pub connection_type: String,
    #[serde(default)]
    pub connection_size: String,
    #[serde(default)]
    pub documents: BTreeMap<DocumentSlot, UploadDescriptor>,
    #[serde(default)]
    pub declaration_accepted: bool,
}

impl ConnectionApplication {
    /// Required slots the citizen left empty.
    pub fn pending_documents(&self) -> Vec<DocumentSlot> {
        DocumentSlot::ALL
            .into_iter()
            .filter(|slot| slot.is_required() && !self.documents.contains_key(slot))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_parse_with_or_without_unit() {
        assert_eq!(ConnectionSize::parse("15mm"), Some(ConnectionSize::Mm15));
        assert_eq!(ConnectionSize::parse(" 32 MM "), Some(ConnectionSize::Mm32));
        assert_eq!(ConnectionSize::parse("50"), Some(ConnectionSize::Mm50));
        assert_eq!(ConnectionSize::parse("1/2\""), None);
        assert_eq!(ConnectionSize::parse("30mm"), None);
    }

    #[test]
    fn society_noc_is_the_only_optional_slot() {
        let application = ConnectionApplication::default();
        let pending = application.pending_documents();
        assert_eq!(pending.len(), 5);
        assert!(!pending.contains(&DocumentSlot::SocietyNoc));
    }
}
