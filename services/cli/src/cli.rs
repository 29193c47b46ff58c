use crate::commands::{run_generate, run_names, run_report, GenerateArgs, NamesArgs, ReportArgs};
use clap::{Parser, Subcommand};
use hpjournal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "hpjournal",
    about = "Build tiered HP journal reports from a tracker CSV export",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the collection names found in an export
    Names(NamesArgs),
    /// Render a collection's tiered journal as HTML markup
    Generate(GenerateArgs),
    /// Print a tier-by-tier summary of a collection
    Report(ReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Names(args) => run_names(args),
        Command::Generate(args) => run_generate(args),
        Command::Report(args) => run_report(args),
    }
}
