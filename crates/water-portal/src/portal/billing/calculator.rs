use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{
    BillContext, BillResult, ConnectionType, InvalidMeterReading, InvalidReadingOrder, MeterMode,
    MeterReading,
    CONNECTION_CATEGORIES, CONNECTION_SIZES, DIVISIONS, DIVISION_CODES, SECTIONS,
};
use super::rates::RateSchedule;

/// Validation failures surfaced to the citizen. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BillingError {
    #[error("{field} is required")]
    InputMissing { field: &'static str },
    #[error("{field} must be a non-negative number (found {value:?})")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} has no option {value:?}")]
    UnknownOption { field: &'static str, value: String },
    #[error(transparent)]
    InvalidReadingOrder(#[from] InvalidReadingOrder),
    #[error("Bill for {consumed_units} units at {rate} per unit is too large to compute")]
    AmountOutOfRange { consumed_units: Decimal, rate: Decimal },
}

impl From<InvalidMeterReading> for BillingError {
    fn from(value: InvalidMeterReading) -> Self {
        match value {
            InvalidMeterReading::Negative { field, value } => BillingError::InvalidNumber {
                field,
                value: value.to_string(),
            },
            InvalidMeterReading::OutOfOrder(err) => BillingError::InvalidReadingOrder(err),
        }
    }
}

/// Raw calculator form as the citizen filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRequest {
    #[serde(default)]
    pub connection_type: Option<String>,
    /// Defaults to metered, matching the calculator's initial state.
    #[serde(default)]
    pub meter_mode: Option<String>,
    #[serde(default)]
    pub previous_reading: Option<String>,
    #[serde(default)]
    pub current_reading: Option<String>,
    #[serde(default, flatten)]
    pub context: BillContext,
}

/// A computed bill plus the descriptive context it was requested with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillQuote {
    #[serde(flatten)]
    pub bill: BillResult,
    pub display_total: String,
    pub context: BillContext,
}

/// Compute a bill from typed inputs.
///
/// Metered mode needs both readings and charges `consumed * per-unit rate`; non-metered
/// mode ignores readings and charges the fixed monthly rate with zero consumed units.
pub fn compute_bill(
    schedule: &RateSchedule,
    connection_type: ConnectionType,
    mode: MeterMode,
    previous: Option<Decimal>,
    current: Option<Decimal>,
) -> Result<BillResult, BillingError> {
    let rate = schedule.rate(connection_type, mode);

    match mode {
        MeterMode::Metered => {
            let previous = previous.ok_or(BillingError::InputMissing {
                field: "previous_reading",
            })?;
            let current = current.ok_or(BillingError::InputMissing {
                field: "current_reading",
            })?;
            let reading = MeterReading::new(previous, current)?;
            let consumed_units = reading.consumed_units();
            let total_amount = consumed_units
                .checked_mul(rate)
                .ok_or(BillingError::AmountOutOfRange {
                    consumed_units,
                    rate,
                })?;

            Ok(BillResult {
                connection_type,
                meter_mode: mode,
                consumed_units,
                rate,
                total_amount,
            })
        }
        MeterMode::NonMetered => Ok(BillResult {
            connection_type,
            meter_mode: mode,
            consumed_units: Decimal::ZERO,
            rate,
            total_amount: rate,
        }),
    }
}

/// Stateless calculator applying a rate schedule to raw form input.
#[derive(Debug, Clone, Default)]
pub struct BillCalculator {
    schedule: RateSchedule,
}

impl BillCalculator {
    pub fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    pub fn quote(&self, request: &BillRequest) -> Result<BillQuote, BillingError> {
        let connection_type = required(&request.connection_type, "connection_type")?;
        let connection_type =
            ConnectionType::parse(connection_type).ok_or_else(|| BillingError::UnknownOption {
                field: "connection_type",
                value: connection_type.to_string(),
            })?;

        let mode = match non_blank(&request.meter_mode) {
            Some(raw) => MeterMode::parse(raw).ok_or_else(|| BillingError::UnknownOption {
                field: "meter_mode",
                value: raw.to_string(),
            })?,
            None => MeterMode::Metered,
        };

        let context = validate_context(&request.context)?;

        let (previous, current) = match mode {
            MeterMode::Metered => (
                Some(parse_reading(
                    required(&request.previous_reading, "previous_reading")?,
                    "previous_reading",
                )?),
                Some(parse_reading(
                    required(&request.current_reading, "current_reading")?,
                    "current_reading",
                )?),
            ),
            MeterMode::NonMetered => (None, None),
        };

        let bill = compute_bill(&self.schedule, connection_type, mode, previous, current)?;
        tracing::debug!(
            connection_type = %bill.connection_type,
            mode = bill.meter_mode.label(),
            total = %bill.total_amount,
            "bill computed"
        );

        Ok(BillQuote {
            display_total: bill.display_total(),
            bill,
            context,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, BillingError> {
    non_blank(value).ok_or(BillingError::InputMissing { field })
}

fn parse_reading(raw: &str, field: &'static str) -> Result<Decimal, BillingError> {
    MeterReading::parse_value(raw).map_err(|err| BillingError::InvalidNumber {
        field,
        value: err.raw,
    })
}

fn validate_context(context: &BillContext) -> Result<BillContext, BillingError> {
    Ok(BillContext {
        division: check_option(&context.division, "division", DIVISIONS)?,
        division_code: check_option(&context.division_code, "division_code", DIVISION_CODES)?,
        section: check_option(&context.section, "section", SECTIONS)?,
        connection_category: check_option(
            &context.connection_category,
            "connection_category",
            CONNECTION_CATEGORIES,
        )?,
        connection_size: check_option(
            &context.connection_size,
            "connection_size",
            CONNECTION_SIZES,
        )?,
    })
}

fn check_option(
    value: &Option<String>,
    field: &'static str,
    options: &[&str],
) -> Result<Option<String>, BillingError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };

    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(raw))
        .map(|option| Some((*option).to_string()))
        .ok_or_else(|| BillingError::UnknownOption {
            field,
            value: raw.to_string(),
        })
}
