//! Exercised-already command - breakdown of selling shares exercised
//! before the buyback

use crate::cmd::{CapArgs, GrantArgs, HoldingArgs};
use crate::tax::{calculate_exercised_sale, ExercisedInput, ExercisedSale, RateTable};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ExercisedCommand {
    #[command(flatten)]
    grant: GrantArgs,

    #[command(flatten)]
    holding: HoldingArgs,

    #[command(flatten)]
    cap: CapArgs,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,
}

impl ExercisedCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rates = RateTable::default();
        let grant = self.grant.validated(&rates)?;
        let input = ExercisedInput {
            total_units: grant.total_units,
            exercise_price_usd: grant.exercise_price_usd,
            fmv_usd: self.holding.fmv()?,
            buyback_price_usd: grant.buyback_price_usd,
            long_term: self.holding.long_term(),
            requested_percent: grant.requested_percent,
            cap: self.cap.resolve()?,
            conversion_rate: grant.conversion_rate,
        };

        let result = calculate_exercised_sale(&input, &rates);

        if self.json {
            print_json(&result)
        } else if self.csv {
            write_csv(&result)
        } else {
            print_table(&result);
            Ok(())
        }
    }
}

/// Row for the breakdown table output
#[derive(Debug, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Item")]
    item: &'static str,

    #[tabled(rename = "Value")]
    value: String,
}

fn print_table(result: &ExercisedSale) {
    let rows = vec![
        BreakdownRow {
            item: "Total Units",
            value: result.total_units.to_string(),
        },
        BreakdownRow {
            item: "Sellable Units",
            value: result.sellable_units.to_string(),
        },
        BreakdownRow {
            item: "Non-Sellable Units",
            value: result.non_sellable_units.to_string(),
        },
        BreakdownRow {
            item: "Limiting Factor",
            value: result.limiting_factor.to_string(),
        },
        BreakdownRow {
            item: "Requested %",
            value: format!("{:.2}%", result.requested_percent),
        },
        BreakdownRow {
            item: "Actual %",
            value: format!("{:.2}%", result.actual_percent),
        },
        BreakdownRow {
            item: "Holding Period",
            value: holding_period(result.long_term).to_string(),
        },
        BreakdownRow {
            item: "Exercise Price",
            value: per_unit(result.exercise_price_usd, result.exercise_price_inr),
        },
        BreakdownRow {
            item: "Fair Market Value",
            value: per_unit(result.fmv_usd, result.fmv_inr),
        },
        BreakdownRow {
            item: "Buyback Price",
            value: per_unit(result.buyback_price_usd, result.buyback_price_inr),
        },
        BreakdownRow {
            item: "Exercise Cost",
            value: format_inr(result.exercise_cost_inr),
        },
        BreakdownRow {
            item: "Perquisite Value",
            value: format_inr(result.perquisite_value_inr),
        },
        BreakdownRow {
            item: "Perquisite Tax",
            value: format_inr(result.perquisite_tax_inr),
        },
        BreakdownRow {
            item: "Total Acquisition Cost",
            value: format_inr(result.total_acquisition_cost_inr),
        },
        BreakdownRow {
            item: "Buyback Amount",
            value: format_inr(result.buyback_amount_inr),
        },
        BreakdownRow {
            item: "Capital Gains",
            value: format_inr_signed(result.capital_gains_inr),
        },
        BreakdownRow {
            item: "Capital Gains Tax",
            value: format_inr(result.capital_gains_tax_inr),
        },
        BreakdownRow {
            item: "Net Proceeds",
            value: format_inr(result.net_proceeds_inr),
        },
        BreakdownRow {
            item: "Cost of Sold Units",
            value: format_inr(result.allocated_acquisition_cost_inr),
        },
        BreakdownRow {
            item: "Total Profit",
            value: format_inr_signed(result.total_profit_inr),
        },
        BreakdownRow {
            item: "Value of Retained Units",
            value: format_inr(result.non_sellable_value_inr),
        },
        BreakdownRow {
            item: "Total Tax Paid",
            value: format_inr(result.tax_paid_inr),
        },
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
}

/// Scenario data for JSON output
#[derive(Debug, Serialize)]
struct ExercisedData {
    total_units: u64,
    sellable_units: u64,
    non_sellable_units: u64,
    limiting_factor: String,
    requested_percent: String,
    actual_percent: String,
    long_term: bool,
    conversion_rate: String,
    exercise_price_usd: String,
    fmv_usd: String,
    buyback_price_usd: String,
    exercise_price_inr: String,
    fmv_inr: String,
    buyback_price_inr: String,
    exercise_cost_inr: String,
    perquisite_value_inr: String,
    perquisite_tax_inr: String,
    total_acquisition_cost_inr: String,
    buyback_amount_inr: String,
    capital_gains_inr: String,
    capital_gains_tax_inr: String,
    net_proceeds_inr: String,
    allocated_acquisition_cost_inr: String,
    total_profit_inr: String,
    non_sellable_value_inr: String,
    tax_paid_inr: String,
}

impl From<&ExercisedSale> for ExercisedData {
    fn from(r: &ExercisedSale) -> Self {
        ExercisedData {
            total_units: r.total_units,
            sellable_units: r.sellable_units,
            non_sellable_units: r.non_sellable_units,
            limiting_factor: r.limiting_factor.to_string(),
            requested_percent: format!("{:.2}", r.requested_percent),
            actual_percent: format!("{:.2}", r.actual_percent),
            long_term: r.long_term,
            conversion_rate: r.conversion_rate.to_string(),
            exercise_price_usd: format!("{:.2}", r.exercise_price_usd),
            fmv_usd: format!("{:.2}", r.fmv_usd),
            buyback_price_usd: format!("{:.2}", r.buyback_price_usd),
            exercise_price_inr: format!("{:.2}", r.exercise_price_inr),
            fmv_inr: format!("{:.2}", r.fmv_inr),
            buyback_price_inr: format!("{:.2}", r.buyback_price_inr),
            exercise_cost_inr: format!("{:.2}", r.exercise_cost_inr),
            perquisite_value_inr: format!("{:.2}", r.perquisite_value_inr),
            perquisite_tax_inr: format!("{:.2}", r.perquisite_tax_inr),
            total_acquisition_cost_inr: format!("{:.2}", r.total_acquisition_cost_inr),
            buyback_amount_inr: format!("{:.2}", r.buyback_amount_inr),
            capital_gains_inr: format!("{:.2}", r.capital_gains_inr),
            capital_gains_tax_inr: format!("{:.2}", r.capital_gains_tax_inr),
            net_proceeds_inr: format!("{:.2}", r.net_proceeds_inr),
            allocated_acquisition_cost_inr: format!("{:.2}", r.allocated_acquisition_cost_inr),
            total_profit_inr: format!("{:.2}", r.total_profit_inr),
            non_sellable_value_inr: format!("{:.2}", r.non_sellable_value_inr),
            tax_paid_inr: format!("{:.2}", r.tax_paid_inr),
        }
    }
}

fn print_json(result: &ExercisedSale) -> anyhow::Result<()> {
    let data = ExercisedData::from(result);
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn write_csv(result: &ExercisedSale) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.serialize(ExercisedData::from(result))?;
    wtr.flush()?;
    Ok(())
}

fn holding_period(long_term: bool) -> &'static str {
    if long_term {
        "Long-Term"
    } else {
        "Short-Term"
    }
}

fn per_unit(usd: Decimal, inr: Decimal) -> String {
    format!("${:.2} / ₹{:.2}", usd, inr)
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
