use crate::tax::allocation::{resolve_sellable_units, CapContext, LimitingFactor};
use crate::tax::rates::RateTable;
use rust_decimal::Decimal;

/// Inputs for the direct-transfer scenario. No FMV or holding period: the
/// options never turn into shares, so no capital-gains event occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferInput {
    pub total_units: u64,
    pub exercise_price_usd: Decimal,
    pub buyback_price_usd: Decimal,
    pub requested_percent: Decimal,
    pub cap: CapContext,
    pub conversion_rate: Decimal,
}

/// Breakdown of transferring unexercised options into the buyback.
/// The whole spread is perquisite income at transfer time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectTransfer {
    pub total_units: u64,
    pub sellable_units: u64,
    pub non_sellable_units: u64,
    pub limiting_factor: LimitingFactor,
    pub requested_percent: Decimal,
    pub actual_percent: Decimal,
    pub conversion_rate: Decimal,
    pub exercise_price_usd: Decimal,
    pub buyback_price_usd: Decimal,
    pub exercise_price_inr: Decimal,
    pub buyback_price_inr: Decimal,
    pub buyback_amount_inr: Decimal,
    /// Exercise cost the holder never pays on the transferred units
    pub notional_exercise_cost_inr: Decimal,
    /// Buyback spread over the exercise price on the transferred units
    pub perquisite_value_inr: Decimal,
    pub perquisite_tax_inr: Decimal,
    pub net_proceeds_inr: Decimal,
    pub net_profit_inr: Decimal,
    /// Remaining options valued at the buyback price; no FMV applies here
    pub non_sellable_value_inr: Decimal,
    pub tax_paid_inr: Decimal,
}

/// Compute the outcome of tendering unexercised options directly.
pub fn calculate_direct_transfer(input: &TransferInput, rates: &RateTable) -> DirectTransfer {
    let exercise_price = input.exercise_price_usd * input.conversion_rate;
    let buyback_price = input.buyback_price_usd * input.conversion_rate;

    let allocation =
        resolve_sellable_units(input.total_units, input.requested_percent, &input.cap, buyback_price);
    let sellable = Decimal::from(allocation.sellable_units);

    let buyback_amount = sellable * buyback_price;
    let notional_exercise_cost = sellable * exercise_price;
    let perquisite_value = (buyback_price - exercise_price) * sellable;
    let perquisite_tax =
        (perquisite_value * rates.effective_rate(rates.perquisite_rate)).round_dp(2);

    let net_proceeds = buyback_amount - perquisite_tax;
    let net_profit = net_proceeds - notional_exercise_cost;
    let non_sellable_value = Decimal::from(allocation.non_sellable_units) * buyback_price;

    DirectTransfer {
        total_units: input.total_units,
        sellable_units: allocation.sellable_units,
        non_sellable_units: allocation.non_sellable_units,
        limiting_factor: allocation.limiting_factor,
        requested_percent: input.requested_percent,
        actual_percent: allocation.actual_percent,
        conversion_rate: input.conversion_rate,
        exercise_price_usd: input.exercise_price_usd,
        buyback_price_usd: input.buyback_price_usd,
        exercise_price_inr: exercise_price,
        buyback_price_inr: buyback_price,
        buyback_amount_inr: buyback_amount,
        notional_exercise_cost_inr: notional_exercise_cost,
        perquisite_value_inr: perquisite_value,
        perquisite_tax_inr: perquisite_tax,
        net_proceeds_inr: net_proceeds,
        net_profit_inr: net_profit,
        non_sellable_value_inr: non_sellable_value,
        tax_paid_inr: perquisite_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::allocation::EmploymentStatus;
    use rust_decimal_macros::dec;

    fn fixture() -> TransferInput {
        TransferInput {
            total_units: 1000,
            exercise_price_usd: dec!(10),
            buyback_price_usd: dec!(60),
            requested_percent: dec!(100),
            cap: CapContext::EmploymentStatus(EmploymentStatus::Current),
            conversion_rate: dec!(83.5),
        }
    }

    #[test]
    fn current_employee_breakdown() {
        let result = calculate_direct_transfer(&fixture(), &RateTable::default());

        assert_eq!(result.sellable_units, 250);
        assert_eq!(result.non_sellable_units, 750);
        assert_eq!(result.limiting_factor, LimitingFactor::StatusCap);

        assert_eq!(result.buyback_amount_inr, dec!(1_252_500));
        assert_eq!(result.notional_exercise_cost_inr, dec!(208_750));
        assert_eq!(result.perquisite_value_inr, dec!(1_043_750));
        assert_eq!(result.perquisite_tax_inr, dec!(386_187.50));
        assert_eq!(result.net_proceeds_inr, dec!(866_312.50));
        assert_eq!(result.net_profit_inr, dec!(657_562.50));
        assert_eq!(result.non_sellable_value_inr, dec!(3_757_500));
        assert_eq!(result.tax_paid_inr, dec!(386_187.50));
    }

    #[test]
    fn retained_options_valued_at_buyback_price() {
        let result = calculate_direct_transfer(&fixture(), &RateTable::default());
        assert_eq!(
            result.non_sellable_value_inr,
            Decimal::from(result.non_sellable_units) * result.buyback_price_inr
        );
    }

    #[test]
    fn tax_paid_has_no_capital_gains_leg() {
        let result = calculate_direct_transfer(&fixture(), &RateTable::default());
        assert_eq!(result.tax_paid_inr, result.perquisite_tax_inr);
    }

    #[test]
    fn monetary_cap_variant() {
        let input = TransferInput {
            cap: CapContext::MonetaryCap {
                amount_inr: dec!(501_000),
            },
            ..fixture()
        };
        let result = calculate_direct_transfer(&input, &RateTable::default());
        // floor(501,000 / 5,010) = 100 units
        assert_eq!(result.sellable_units, 100);
        assert_eq!(result.limiting_factor, LimitingFactor::MonetaryCap);
        assert_eq!(result.buyback_amount_inr, dec!(501_000));
    }

    #[test]
    fn repeat_calls_are_identical() {
        let input = fixture();
        let rates = RateTable::default();
        assert_eq!(
            calculate_direct_transfer(&input, &rates),
            calculate_direct_transfer(&input, &rates)
        );
    }
}
