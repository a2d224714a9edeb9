use serde::{Deserialize, Serialize};

/// Directory entry for a registered property and its consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property_number: String,
    pub consumer_id: String,
    pub mobile_number: String,
    pub email: String,
    pub society_name: String,
    pub zone: String,
    pub ward: String,
    pub plot_flat: String,
    pub owner_name: String,
    pub building_type: String,
    pub locality: String,
    pub pincode: String,
    pub address: String,
}

impl PropertyRecord {
    /// Case-insensitive exact match on property number, consumer ID, or mobile number.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.property_number.eq_ignore_ascii_case(query)
            || self.consumer_id.eq_ignore_ascii_case(query)
            || self.mobile_number.eq_ignore_ascii_case(query)
    }
}

/// Administrative zone; each owns a fixed block of wards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    A,
    B,
    C,
    D,
}

impl Zone {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            _ => None,
        }
    }

    pub const fn wards(self) -> &'static [&'static str] {
        match self {
            Zone::A => &["1", "2", "3"],
            Zone::B => &["4", "5", "6"],
            Zone::C => &["7", "8", "9"],
            Zone::D => &["10", "11", "12"],
        }
    }

    pub fn contains_ward(self, ward: &str) -> bool {
        self.wards().contains(&ward.trim())
    }
}
