use crate::tax::exercised::ExercisedSale;
use crate::tax::transfer::DirectTransfer;
use rust_decimal::Decimal;

/// Which scenario the comparison favours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    ExerciseFirst,
    DirectTransfer,
}

impl Recommendation {
    pub fn display(&self) -> &'static str {
        match self {
            Recommendation::ExerciseFirst => "Exercising before the buyback is more profitable",
            Recommendation::DirectTransfer => "Transferring options directly is more profitable",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Side-by-side view of the two scenario breakdowns
#[derive(Debug, Clone, Copy)]
pub struct Comparison<'a> {
    pub exercised: &'a ExercisedSale,
    pub transfer: &'a DirectTransfer,
    /// Exercised-sale profit minus direct-transfer profit
    pub profit_difference_inr: Decimal,
    /// Exercised-sale tax minus direct-transfer tax
    pub tax_difference_inr: Decimal,
    pub recommendation: Recommendation,
}

/// Diff the two scenario results. A strictly positive profit difference
/// favours exercising first; a tie goes to the direct transfer.
pub fn compare<'a>(exercised: &'a ExercisedSale, transfer: &'a DirectTransfer) -> Comparison<'a> {
    let profit_difference = exercised.total_profit_inr - transfer.net_profit_inr;
    let tax_difference = exercised.tax_paid_inr - transfer.tax_paid_inr;

    let recommendation = if profit_difference > Decimal::ZERO {
        Recommendation::ExerciseFirst
    } else {
        Recommendation::DirectTransfer
    };

    Comparison {
        exercised,
        transfer,
        profit_difference_inr: profit_difference,
        tax_difference_inr: tax_difference,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::allocation::{CapContext, EmploymentStatus};
    use crate::tax::exercised::{calculate_exercised_sale, ExercisedInput};
    use crate::tax::rates::RateTable;
    use crate::tax::transfer::{calculate_direct_transfer, TransferInput};
    use rust_decimal_macros::dec;

    fn scenario_pair(buyback_price_usd: Decimal) -> (ExercisedSale, DirectTransfer) {
        let rates = RateTable::default();
        let cap = CapContext::EmploymentStatus(EmploymentStatus::Current);
        let exercised = calculate_exercised_sale(
            &ExercisedInput {
                total_units: 1000,
                exercise_price_usd: dec!(10),
                fmv_usd: dec!(50),
                buyback_price_usd,
                long_term: true,
                requested_percent: dec!(100),
                cap,
                conversion_rate: dec!(83.5),
            },
            &rates,
        );
        let transfer = calculate_direct_transfer(
            &TransferInput {
                total_units: 1000,
                exercise_price_usd: dec!(10),
                buyback_price_usd,
                requested_percent: dec!(100),
                cap,
                conversion_rate: dec!(83.5),
            },
            &rates,
        );
        (exercised, transfer)
    }

    #[test]
    fn long_term_sale_beats_transfer() {
        let (exercised, transfer) = scenario_pair(dec!(60));
        let comparison = compare(&exercised, &transfer);

        assert_eq!(comparison.profit_difference_inr, dec!(22_962.50));
        assert_eq!(comparison.tax_difference_inr, dec!(903_887.50));
        assert_eq!(comparison.recommendation, Recommendation::ExerciseFirst);
    }

    #[test]
    fn differences_match_scenario_fields() {
        let (exercised, transfer) = scenario_pair(dec!(60));
        let comparison = compare(&exercised, &transfer);

        assert_eq!(
            comparison.profit_difference_inr,
            exercised.total_profit_inr - transfer.net_profit_inr
        );
        assert_eq!(
            comparison.tax_difference_inr,
            exercised.tax_paid_inr - transfer.tax_paid_inr
        );
    }

    #[test]
    fn tie_goes_to_direct_transfer() {
        let (exercised, mut transfer) = scenario_pair(dec!(60));
        transfer.net_profit_inr = exercised.total_profit_inr;
        let comparison = compare(&exercised, &transfer);

        assert_eq!(comparison.profit_difference_inr, Decimal::ZERO);
        assert_eq!(comparison.recommendation, Recommendation::DirectTransfer);
    }

    #[test]
    fn losing_sale_recommends_transfer() {
        // Buyback barely above the exercise price: the perquisite tax paid
        // on the old FMV sinks the exercised position.
        let (exercised, transfer) = scenario_pair(dec!(11));
        let comparison = compare(&exercised, &transfer);

        assert!(comparison.profit_difference_inr < Decimal::ZERO);
        assert_eq!(comparison.recommendation, Recommendation::DirectTransfer);
    }
}
