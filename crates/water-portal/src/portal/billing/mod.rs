//! Water tax calculator: metered consumption charges and flat non-metered rates.

pub mod calculator;
pub mod domain;
pub mod rates;
pub mod router;

#[cfg(test)]
mod tests;

pub use calculator::{compute_bill, BillCalculator, BillQuote, BillRequest, BillingError};
pub use domain::{
    format_rupees, BillContext, BillResult, ConnectionType, InvalidMeterReading,
    InvalidReadingOrder, InvalidReadingValue, MeterMode, MeterReading,
};
pub use rates::{RateRow, RateSchedule};
pub use router::billing_router;
