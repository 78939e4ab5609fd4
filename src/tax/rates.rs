use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tax and conversion rates applied to a buyback event.
///
/// Surcharge and cess sit on top of every base rate: the surcharge is a
/// fraction of the base, the cess is an absolute addition. See
/// [`RateTable::effective_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    /// Base rate on perquisite income (the exercise/transfer spread)
    pub perquisite_rate: Decimal,
    /// Base rate on short-term capital gains (held under 24 months)
    pub short_term_rate: Decimal,
    /// Base rate on long-term capital gains
    pub long_term_rate: Decimal,
    /// Surcharge levied as a fraction of the base tax rate
    pub surcharge_rate: Decimal,
    /// Health and education cess, added after the surcharge
    pub cess_rate: Decimal,
    /// Default USD to INR conversion rate
    pub conversion_rate: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            perquisite_rate: dec!(0.30),
            short_term_rate: dec!(0.30),
            long_term_rate: dec!(0.20),
            surcharge_rate: dec!(0.10),
            cess_rate: dec!(0.04),
            conversion_rate: dec!(83.5),
        }
    }
}

impl RateTable {
    /// Effective rate for a base rate: base + base * surcharge + cess
    pub fn effective_rate(&self, base: Decimal) -> Decimal {
        base + base * self.surcharge_rate + self.cess_rate
    }

    /// Effective capital gains rate for the holding period
    pub fn capital_gains_rate(&self, long_term: bool) -> Decimal {
        if long_term {
            self.effective_rate(self.long_term_rate)
        } else {
            self.effective_rate(self.short_term_rate)
        }
    }
}

/// Shares held for 24 months or more qualify as long-term
pub fn is_long_term(acquired: NaiveDate, disposed: NaiveDate) -> bool {
    match acquired.checked_add_months(Months::new(24)) {
        Some(threshold) => disposed >= threshold,
        None => false,
    }
}
