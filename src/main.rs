use clap::{Parser, Subcommand};

mod cmd;
mod input;
mod tax;

#[derive(Parser, Debug)]
#[command(name = "esopc", version, about = "ESOP buyback calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Breakdown for shares exercised before the buyback
    Exercised(cmd::exercised::ExercisedCommand),
    /// Breakdown for options transferred directly into the buyback
    Transfer(cmd::transfer::TransferCommand),
    /// Compare both scenarios and recommend one
    Compare(cmd::compare::CompareCommand),
    /// Show the rate table and selling caps
    Rates(cmd::rates::RatesCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Exercised(c) => c.exec(),
        Command::Transfer(c) => c.exec(),
        Command::Compare(c) => c.exec(),
        Command::Rates(c) => c.exec(),
    }
}
