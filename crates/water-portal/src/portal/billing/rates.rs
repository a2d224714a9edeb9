use rust_decimal::Decimal;
use serde::Serialize;

use super::domain::{ConnectionType, MeterMode};

/// Tariff table: a per-unit charge for metered connections and a fixed monthly
/// charge for non-metered ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateSchedule {
    pub metered_per_unit: RateRow,
    pub non_metered_monthly: RateRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateRow {
    pub residential: Decimal,
    pub commercial: Decimal,
    pub industrial: Decimal,
}

impl RateRow {
    pub fn for_type(&self, connection_type: ConnectionType) -> Decimal {
        match connection_type {
            ConnectionType::Residential => self.residential,
            ConnectionType::Commercial => self.commercial,
            ConnectionType::Industrial => self.industrial,
        }
    }
}

impl RateSchedule {
    /// Municipal policy constants.
    pub fn standard() -> Self {
        Self {
            metered_per_unit: RateRow {
                residential: Decimal::from(8),
                commercial: Decimal::from(15),
                industrial: Decimal::from(25),
            },
            non_metered_monthly: RateRow {
                residential: Decimal::from(500),
                commercial: Decimal::from(1500),
                industrial: Decimal::from(3000),
            },
        }
    }

    pub fn rate(&self, connection_type: ConnectionType, mode: MeterMode) -> Decimal {
        match mode {
            MeterMode::Metered => self.metered_per_unit.for_type(connection_type),
            MeterMode::NonMetered => self.non_metered_monthly.for_type(connection_type),
        }
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}
