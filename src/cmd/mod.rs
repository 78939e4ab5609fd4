pub mod compare;
pub mod exercised;
pub mod rates;
pub mod transfer;

use crate::input::{
    validate_buyback_price, validate_grant_price, validate_percent, validate_rate,
    validate_unit_count, ValidationError,
};
use crate::tax::{is_long_term, CapContext, EmploymentStatus, RateTable};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

/// Grant and pricing inputs shared by every scenario command
#[derive(Args, Debug)]
pub struct GrantArgs {
    /// Total vested units in the position
    #[arg(short, long)]
    units: u64,

    /// Percentage of the position to tender (0-100]
    #[arg(short, long)]
    percent: Decimal,

    /// Exercise (strike) price per unit, USD
    #[arg(short, long)]
    exercise_price: Decimal,

    /// Buyback offer price per unit, USD
    #[arg(short, long)]
    buyback_price: Decimal,

    /// USD to INR conversion rate (default 83.5)
    #[arg(short, long)]
    rate: Option<Decimal>,
}

/// Grant inputs after caller-side validation
pub struct ValidatedGrant {
    pub total_units: u64,
    pub requested_percent: Decimal,
    pub exercise_price_usd: Decimal,
    pub buyback_price_usd: Decimal,
    pub conversion_rate: Decimal,
}

impl GrantArgs {
    pub fn validated(&self, rates: &RateTable) -> Result<ValidatedGrant, ValidationError> {
        Ok(ValidatedGrant {
            total_units: validate_unit_count(self.units)?,
            requested_percent: validate_percent(self.percent)?,
            exercise_price_usd: validate_grant_price("exercise price", self.exercise_price)?,
            buyback_price_usd: validate_buyback_price(self.buyback_price)?,
            conversion_rate: validate_rate(
                "conversion rate",
                self.rate.unwrap_or(rates.conversion_rate),
            )?,
        })
    }
}

/// Selling-cap configuration: exactly one of the two supported variants
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CapArgs {
    /// Absolute cap on sale proceeds, in INR
    #[arg(long, value_name = "INR")]
    cap_amount: Option<Decimal>,

    /// Employment status cap (current 25%, former 50%)
    #[arg(long, value_enum)]
    status: Option<EmploymentStatusArg>,
}

impl CapArgs {
    pub fn resolve(&self) -> Result<CapContext, ValidationError> {
        match (self.cap_amount, self.status) {
            (Some(amount), None) => Ok(CapContext::MonetaryCap {
                amount_inr: validate_rate("monetary cap", amount)?,
            }),
            (None, Some(status)) => Ok(CapContext::EmploymentStatus(status.into())),
            _ => unreachable!("clap enforces exactly one cap option"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmploymentStatusArg {
    Current,
    Former,
}

impl From<EmploymentStatusArg> for EmploymentStatus {
    fn from(arg: EmploymentStatusArg) -> Self {
        match arg {
            EmploymentStatusArg::Current => EmploymentStatus::Current,
            EmploymentStatusArg::Former => EmploymentStatus::Former,
        }
    }
}

/// Holding-period inputs for the exercised-already scenario: either the
/// long-term flag directly, or a date pair it is derived from
#[derive(Args, Debug)]
pub struct HoldingArgs {
    /// Fair market value per unit at exercise, USD
    #[arg(short, long)]
    fmv: Decimal,

    /// Shares held 24 months or more (long-term capital gains)
    #[arg(long, conflicts_with_all = ["exercised_on", "buyback_on"])]
    long_term: bool,

    /// Date the options were exercised (YYYY-MM-DD)
    #[arg(long, requires = "buyback_on", value_name = "DATE")]
    exercised_on: Option<NaiveDate>,

    /// Date of the buyback settlement (YYYY-MM-DD)
    #[arg(long, requires = "exercised_on", value_name = "DATE")]
    buyback_on: Option<NaiveDate>,
}

impl HoldingArgs {
    pub fn fmv(&self) -> Result<Decimal, ValidationError> {
        validate_grant_price("fair market value", self.fmv)
    }

    pub fn long_term(&self) -> bool {
        match (self.exercised_on, self.buyback_on) {
            (Some(acquired), Some(disposed)) => is_long_term(acquired, disposed),
            _ => self.long_term,
        }
    }
}
