use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Use class of a water connection; keys both rate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Residential,
    Commercial,
    Industrial,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 3] = [
        ConnectionType::Residential,
        ConnectionType::Commercial,
        ConnectionType::Industrial,
    ];

    /// Case-insensitive; the connection forms call residential use "Domestic".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "residential" | "domestic" => Some(Self::Residential),
            "commercial" => Some(Self::Commercial),
            "industrial" => Some(Self::Industrial),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ConnectionType::Residential => "Residential",
            ConnectionType::Commercial => "Commercial",
            ConnectionType::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether consumption is measured or charged at a flat monthly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeterMode {
    Metered,
    NonMetered,
}

impl MeterMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "meter" | "metered" => Some(Self::Metered),
            "non-meter" | "non-metered" | "nonmeter" | "nonmetered" => Some(Self::NonMetered),
            _ => None,
        }
    }

    pub fn from_flag(is_metered: bool) -> Self {
        if is_metered {
            Self::Metered
        } else {
            Self::NonMetered
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MeterMode::Metered => "Meter",
            MeterMode::NonMetered => "Non-Meter",
        }
    }
}

/// A pair of meter readings. Construction enforces `current >= previous >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeterReading {
    previous: Decimal,
    current: Decimal,
}

impl MeterReading {
    pub fn new(previous: Decimal, current: Decimal) -> Result<Self, InvalidMeterReading> {
        for (field, value) in [("previous_reading", previous), ("current_reading", current)] {
            if is_negative(value) {
                return Err(InvalidMeterReading::Negative { field, value });
            }
        }
        if current < previous {
            return Err(InvalidReadingOrder { previous, current }.into());
        }
        Ok(Self { previous, current })
    }

    /// Parse a typed reading as a non-negative decimal. Blank input is the caller's concern.
    pub fn parse_value(raw: &str) -> Result<Decimal, InvalidReadingValue> {
        let invalid = || InvalidReadingValue {
            raw: raw.to_string(),
        };
        let value = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
        if is_negative(value) {
            return Err(invalid());
        }
        Ok(value)
    }

    pub fn previous(&self) -> Decimal {
        self.previous
    }

    pub fn current(&self) -> Decimal {
        self.current
    }

    pub fn consumed_units(&self) -> Decimal {
        self.current - self.previous
    }
}

// `-0` parses with the sign bit set and still counts as zero.
fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

/// Raised when the current reading is below the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Current reading cannot be less than previous reading! (previous {previous}, current {current})")]
pub struct InvalidReadingOrder {
    pub previous: Decimal,
    pub current: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMeterReading {
    #[error("{field} must be a non-negative number (found {value})")]
    Negative { field: &'static str, value: Decimal },
    #[error(transparent)]
    OutOfOrder(#[from] InvalidReadingOrder),
}

/// Typed reading that is not a non-negative decimal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("meter reading {raw:?} is not a non-negative number")]
pub struct InvalidReadingValue {
    pub raw: String,
}

/// Derived bill. `rate` is per unit when metered and the fixed monthly charge otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillResult {
    pub connection_type: ConnectionType,
    pub meter_mode: MeterMode,
    pub consumed_units: Decimal,
    pub rate: Decimal,
    pub total_amount: Decimal,
}

impl BillResult {
    /// Rupee amount rounded to two places, e.g. `₹400.00`.
    pub fn display_total(&self) -> String {
        format_rupees(self.total_amount)
    }
}

pub fn format_rupees(amount: Decimal) -> String {
    format!("₹{:.2}", amount.round_dp(2))
}

/// Descriptive calculator inputs that are validated and echoed but never priced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillContext {
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub division_code: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub connection_category: Option<String>,
    #[serde(default)]
    pub connection_size: Option<String>,
}

pub(crate) const DIVISIONS: &[&str] = &["division1", "division2", "division3"];
pub(crate) const DIVISION_CODES: &[&str] = &["A", "B", "C"];
pub(crate) const SECTIONS: &[&str] = &["A-1", "A-2", "B-1", "B-2", "C-1", "C-2"];
pub(crate) const CONNECTION_CATEGORIES: &[&str] = &["regular", "annual"];
/// Pipe diameters in inches as offered by the calculator.
pub(crate) const CONNECTION_SIZES: &[&str] = &["0.5", "0.75", "1", "1.5", "2", "3", "4"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_connection_type_labels() {
        assert_eq!(
            ConnectionType::parse("RESIDENTIAL"),
            Some(ConnectionType::Residential)
        );
        assert_eq!(
            ConnectionType::parse(" domestic "),
            Some(ConnectionType::Residential)
        );
        assert_eq!(ConnectionType::parse("agricultural"), None);
    }

    #[test]
    fn parses_meter_mode_spellings() {
        assert_eq!(MeterMode::parse("Meter"), Some(MeterMode::Metered));
        assert_eq!(MeterMode::parse("non-meter"), Some(MeterMode::NonMetered));
        assert_eq!(MeterMode::parse("Non-Metered"), Some(MeterMode::NonMetered));
        assert_eq!(MeterMode::parse("non metered"), Some(MeterMode::NonMetered));
        assert_eq!(MeterMode::parse("estimated"), None);
    }

    #[test]
    fn reading_order_is_enforced() {
        let err = MeterReading::new(Decimal::from(150), Decimal::from(100))
            .expect_err("current below previous");

        assert_eq!(
            err,
            InvalidMeterReading::OutOfOrder(InvalidReadingOrder {
                previous: Decimal::from(150),
                current: Decimal::from(100),
            })
        );

        let reading = MeterReading::new(Decimal::from(100), Decimal::from(100))
            .expect("equal readings allowed");
        assert_eq!(reading.consumed_units(), Decimal::ZERO);
    }

    #[test]
    fn negative_readings_are_rejected_even_when_ordered() {
        assert_eq!(
            MeterReading::new(Decimal::from(-100), Decimal::from(-50)),
            Err(InvalidMeterReading::Negative {
                field: "previous_reading",
                value: Decimal::from(-100),
            })
        );
        assert_eq!(
            MeterReading::new(Decimal::ZERO, Decimal::new(-5, 1)),
            Err(InvalidMeterReading::Negative {
                field: "current_reading",
                value: Decimal::new(-5, 1),
            })
        );
    }

    #[test]
    fn parse_value_accepts_trimmed_non_negative_decimals() {
        assert_eq!(MeterReading::parse_value(" 150.5 "), Ok(Decimal::new(1505, 1)));
        assert_eq!(MeterReading::parse_value("-0"), Ok(Decimal::ZERO));
        assert_eq!(
            MeterReading::parse_value("-3"),
            Err(InvalidReadingValue {
                raw: "-3".to_string()
            })
        );
        assert!(MeterReading::parse_value("four").is_err());
    }

    #[test]
    fn display_total_rounds_to_paise() {
        let bill = BillResult {
            connection_type: ConnectionType::Commercial,
            meter_mode: MeterMode::Metered,
            consumed_units: Decimal::new(125, 1),
            rate: Decimal::from(15),
            total_amount: Decimal::new(1875, 1),
        };
        assert_eq!(bill.display_total(), "₹187.50");
    }
}
