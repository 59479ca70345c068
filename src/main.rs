use clap::{Parser, Subcommand};

mod cmd;
mod input;
mod tax;

#[derive(Parser, Debug)]
#[command(
    name = "taxin",
    version,
    about = "Indian income tax calculator for FY 2024-25: Old vs New regime"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute tax under both regimes and recommend the cheaper one
    Assess(cmd::assess::AssessCommand),
    /// Display the statutory slab tables and rebate rules
    Slabs(cmd::slabs::SlabsCommand),
    /// Print the expected input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assess(cmd) => cmd.exec(),
        Command::Slabs(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
