//! Compare command - both scenarios side by side with a recommendation

use crate::cmd::{CapArgs, GrantArgs, HoldingArgs};
use crate::tax::{
    calculate_direct_transfer, calculate_exercised_sale, compare, Comparison, ExercisedInput,
    RateTable, TransferInput,
};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CompareCommand {
    #[command(flatten)]
    grant: GrantArgs,

    #[command(flatten)]
    holding: HoldingArgs,

    #[command(flatten)]
    cap: CapArgs,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rates = RateTable::default();
        let grant = self.grant.validated(&rates)?;
        let cap = self.cap.resolve()?;

        let exercised = calculate_exercised_sale(
            &ExercisedInput {
                total_units: grant.total_units,
                exercise_price_usd: grant.exercise_price_usd,
                fmv_usd: self.holding.fmv()?,
                buyback_price_usd: grant.buyback_price_usd,
                long_term: self.holding.long_term(),
                requested_percent: grant.requested_percent,
                cap,
                conversion_rate: grant.conversion_rate,
            },
            &rates,
        );
        let transfer = calculate_direct_transfer(
            &TransferInput {
                total_units: grant.total_units,
                exercise_price_usd: grant.exercise_price_usd,
                buyback_price_usd: grant.buyback_price_usd,
                requested_percent: grant.requested_percent,
                cap,
                conversion_rate: grant.conversion_rate,
            },
            &rates,
        );

        let comparison = compare(&exercised, &transfer);

        if self.json {
            print_json(&comparison)
        } else {
            print_table(&comparison);
            Ok(())
        }
    }
}

/// Row of the side-by-side comparison table
#[derive(Debug, Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Item")]
    item: &'static str,

    #[tabled(rename = "Exercised & Sold")]
    exercised: String,

    #[tabled(rename = "Direct Transfer")]
    transfer: String,
}

fn print_table(comparison: &Comparison) {
    let exercised = comparison.exercised;
    let transfer = comparison.transfer;

    let rows = vec![
        ComparisonRow {
            item: "Sellable Units",
            exercised: exercised.sellable_units.to_string(),
            transfer: transfer.sellable_units.to_string(),
        },
        ComparisonRow {
            item: "Limiting Factor",
            exercised: exercised.limiting_factor.to_string(),
            transfer: transfer.limiting_factor.to_string(),
        },
        ComparisonRow {
            item: "Buyback Amount",
            exercised: format_inr(exercised.buyback_amount_inr),
            transfer: format_inr(transfer.buyback_amount_inr),
        },
        ComparisonRow {
            item: "Perquisite Tax",
            exercised: format_inr(exercised.perquisite_tax_inr),
            transfer: format_inr(transfer.perquisite_tax_inr),
        },
        ComparisonRow {
            item: "Capital Gains Tax",
            exercised: format_inr(exercised.capital_gains_tax_inr),
            transfer: "-".to_string(),
        },
        ComparisonRow {
            item: "Total Tax Paid",
            exercised: format_inr(exercised.tax_paid_inr),
            transfer: format_inr(transfer.tax_paid_inr),
        },
        ComparisonRow {
            item: "Net Proceeds",
            exercised: format_inr(exercised.net_proceeds_inr),
            transfer: format_inr(transfer.net_proceeds_inr),
        },
        ComparisonRow {
            item: "Profit",
            exercised: format_inr_signed(exercised.total_profit_inr),
            transfer: format_inr_signed(transfer.net_profit_inr),
        },
        ComparisonRow {
            item: "Value of Retained Position",
            exercised: format_inr(exercised.non_sellable_value_inr),
            transfer: format_inr(transfer.non_sellable_value_inr),
        },
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);

    println!();
    println!(
        "Profit difference: {} | Tax difference: {}",
        format_inr_signed(comparison.profit_difference_inr),
        format_inr_signed(comparison.tax_difference_inr)
    );
    println!("Recommendation: {}", comparison.recommendation);
}

/// Comparison data for JSON output
#[derive(Debug, Serialize)]
struct ComparisonData {
    exercised_profit_inr: String,
    transfer_profit_inr: String,
    profit_difference_inr: String,
    exercised_tax_inr: String,
    transfer_tax_inr: String,
    tax_difference_inr: String,
    recommendation: String,
}

fn print_json(comparison: &Comparison) -> anyhow::Result<()> {
    let data = ComparisonData {
        exercised_profit_inr: format!("{:.2}", comparison.exercised.total_profit_inr),
        transfer_profit_inr: format!("{:.2}", comparison.transfer.net_profit_inr),
        profit_difference_inr: format!("{:.2}", comparison.profit_difference_inr),
        exercised_tax_inr: format!("{:.2}", comparison.exercised.tax_paid_inr),
        transfer_tax_inr: format!("{:.2}", comparison.transfer.tax_paid_inr),
        tax_difference_inr: format!("{:.2}", comparison.tax_difference_inr),
        recommendation: comparison.recommendation.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn format_inr(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}

fn format_inr_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-₹{:.2}", amount.abs())
    } else {
        format!("₹{:.2}", amount)
    }
}
