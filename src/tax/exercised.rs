use crate::tax::allocation::{resolve_sellable_units, CapContext, LimitingFactor};
use crate::tax::rates::RateTable;
use rust_decimal::Decimal;

/// Inputs for the exercised-already scenario. Prices are per unit in USD;
/// the calculator converts everything through `conversion_rate` up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisedInput {
    pub total_units: u64,
    pub exercise_price_usd: Decimal,
    pub fmv_usd: Decimal,
    pub buyback_price_usd: Decimal,
    pub long_term: bool,
    pub requested_percent: Decimal,
    pub cap: CapContext,
    pub conversion_rate: Decimal,
}

/// Full breakdown of exercising before the buyback and selling shares.
///
/// Monetary fields are INR unless suffixed otherwise. `capital_gains_inr`
/// may be negative; `capital_gains_tax_inr` never is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisedSale {
    pub total_units: u64,
    pub sellable_units: u64,
    pub non_sellable_units: u64,
    pub limiting_factor: LimitingFactor,
    pub requested_percent: Decimal,
    pub actual_percent: Decimal,
    pub long_term: bool,
    pub conversion_rate: Decimal,
    pub exercise_price_usd: Decimal,
    pub fmv_usd: Decimal,
    pub buyback_price_usd: Decimal,
    pub exercise_price_inr: Decimal,
    pub fmv_inr: Decimal,
    pub buyback_price_inr: Decimal,
    /// Cost of exercising the whole position
    pub exercise_cost_inr: Decimal,
    /// FMV spread over the exercise price, across the whole position
    pub perquisite_value_inr: Decimal,
    pub perquisite_tax_inr: Decimal,
    /// Exercise cost plus perquisite tax for the whole position
    pub total_acquisition_cost_inr: Decimal,
    /// Proceeds of tendering the sellable units
    pub buyback_amount_inr: Decimal,
    pub capital_gains_inr: Decimal,
    pub capital_gains_tax_inr: Decimal,
    pub net_proceeds_inr: Decimal,
    /// Share of the acquisition cost attributable to the sold units
    pub allocated_acquisition_cost_inr: Decimal,
    pub total_profit_inr: Decimal,
    /// FMV of the units the caps forced the holder to retain
    pub non_sellable_value_inr: Decimal,
    pub tax_paid_inr: Decimal,
}

/// Compute the outcome of having exercised the whole position before the
/// buyback, then selling as many shares as the caps allow.
///
/// Exercise cost and perquisite tax fall on every vested unit; the sale
/// only realizes the sellable slice, so the already-taxed perquisite value
/// and the acquisition cost are prorated onto the units actually sold.
pub fn calculate_exercised_sale(input: &ExercisedInput, rates: &RateTable) -> ExercisedSale {
    let exercise_price = input.exercise_price_usd * input.conversion_rate;
    let fmv = input.fmv_usd * input.conversion_rate;
    let buyback_price = input.buyback_price_usd * input.conversion_rate;

    let allocation =
        resolve_sellable_units(input.total_units, input.requested_percent, &input.cap, buyback_price);
    let sellable = Decimal::from(allocation.sellable_units);
    let total = Decimal::from(input.total_units);

    let exercise_cost = total * exercise_price;
    let perquisite_value = (fmv - exercise_price) * total;
    let perquisite_tax =
        (perquisite_value * rates.effective_rate(rates.perquisite_rate)).round_dp(2);
    let total_acquisition_cost = exercise_cost + perquisite_tax;

    let buyback_amount = sellable * buyback_price;
    // Cost basis of the sold slice: its exercise cost plus its share of the
    // perquisite value already taxed at exercise time.
    let capital_gains =
        buyback_amount - (sellable * exercise_price + perquisite_value * sellable / total);
    let capital_gains_tax = (capital_gains * rates.capital_gains_rate(input.long_term))
        .round_dp(2)
        .max(Decimal::ZERO);

    let net_proceeds = buyback_amount - capital_gains_tax;
    let allocated_acquisition_cost = total_acquisition_cost * sellable / total;
    let total_profit = net_proceeds - allocated_acquisition_cost;
    let non_sellable_value = Decimal::from(allocation.non_sellable_units) * fmv;

    ExercisedSale {
        total_units: input.total_units,
        sellable_units: allocation.sellable_units,
        non_sellable_units: allocation.non_sellable_units,
        limiting_factor: allocation.limiting_factor,
        requested_percent: input.requested_percent,
        actual_percent: allocation.actual_percent,
        long_term: input.long_term,
        conversion_rate: input.conversion_rate,
        exercise_price_usd: input.exercise_price_usd,
        fmv_usd: input.fmv_usd,
        buyback_price_usd: input.buyback_price_usd,
        exercise_price_inr: exercise_price,
        fmv_inr: fmv,
        buyback_price_inr: buyback_price,
        exercise_cost_inr: exercise_cost,
        perquisite_value_inr: perquisite_value,
        perquisite_tax_inr: perquisite_tax,
        total_acquisition_cost_inr: total_acquisition_cost,
        buyback_amount_inr: buyback_amount,
        capital_gains_inr: capital_gains,
        capital_gains_tax_inr: capital_gains_tax,
        net_proceeds_inr: net_proceeds,
        allocated_acquisition_cost_inr: allocated_acquisition_cost,
        total_profit_inr: total_profit,
        non_sellable_value_inr: non_sellable_value,
        tax_paid_inr: perquisite_tax + capital_gains_tax,
    }
}
