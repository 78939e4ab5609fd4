//! Rates command - reference view of the rate table and selling caps

use crate::tax::{allocation, EmploymentStatus, RateTable};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct RatesCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rates = RateTable::default();
        if self.json {
            print_json(&rates)
        } else {
            print_table(&rates);
            Ok(())
        }
    }
}

/// Row of the rate reference table
#[derive(Debug, Tabled)]
struct RateRow {
    #[tabled(rename = "Rate")]
    name: &'static str,

    #[tabled(rename = "Base")]
    base: String,

    #[tabled(rename = "Effective")]
    effective: String,
}

fn print_table(rates: &RateTable) {
    let rows = vec![
        RateRow {
            name: "Perquisite",
            base: percent(rates.perquisite_rate),
            effective: percent(rates.effective_rate(rates.perquisite_rate)),
        },
        RateRow {
            name: "Short-Term Capital Gains",
            base: percent(rates.short_term_rate),
            effective: percent(rates.effective_rate(rates.short_term_rate)),
        },
        RateRow {
            name: "Long-Term Capital Gains",
            base: percent(rates.long_term_rate),
            effective: percent(rates.effective_rate(rates.long_term_rate)),
        },
        RateRow {
            name: "Surcharge",
            base: percent(rates.surcharge_rate),
            effective: "-".to_string(),
        },
        RateRow {
            name: "Cess",
            base: percent(rates.cess_rate),
            effective: "-".to_string(),
        },
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);

    println!();
    println!("Default conversion rate: {} INR/USD", rates.conversion_rate);
    println!(
        "Selling caps: {} {}%, {} {}%, monetary cap ₹{}",
        EmploymentStatus::Current,
        EmploymentStatus::Current.cap_percent(),
        EmploymentStatus::Former,
        EmploymentStatus::Former.cap_percent(),
        allocation::status_monetary_cap_inr()
    );
}

/// Rate data for JSON output
#[derive(Debug, Serialize)]
struct RatesData {
    perquisite_rate: String,
    effective_perquisite_rate: String,
    short_term_rate: String,
    effective_short_term_rate: String,
    long_term_rate: String,
    effective_long_term_rate: String,
    surcharge_rate: String,
    cess_rate: String,
    conversion_rate: String,
    current_employee_cap_percent: String,
    former_employee_cap_percent: String,
    status_monetary_cap_inr: String,
}

fn print_json(rates: &RateTable) -> anyhow::Result<()> {
    let data = RatesData {
        perquisite_rate: rates.perquisite_rate.to_string(),
        effective_perquisite_rate: rates.effective_rate(rates.perquisite_rate).to_string(),
        short_term_rate: rates.short_term_rate.to_string(),
        effective_short_term_rate: rates.effective_rate(rates.short_term_rate).to_string(),
        long_term_rate: rates.long_term_rate.to_string(),
        effective_long_term_rate: rates.effective_rate(rates.long_term_rate).to_string(),
        surcharge_rate: rates.surcharge_rate.to_string(),
        cess_rate: rates.cess_rate.to_string(),
        conversion_rate: rates.conversion_rate.to_string(),
        current_employee_cap_percent: EmploymentStatus::Current.cap_percent().to_string(),
        former_employee_cap_percent: EmploymentStatus::Former.cap_percent().to_string(),
        status_monetary_cap_inr: allocation::status_monetary_cap_inr().to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn percent(rate: Decimal) -> String {
    format!("{:.2}%", rate * rust_decimal_macros::dec!(100))
}
