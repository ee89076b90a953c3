use std::error::Error;

use clap::{Parser, Subcommand};

/// Runs the available docx_helper sample documents from the command line.
#[derive(Parser)]
#[command(author, version, about = "Convenience CLI for docx_helper samples")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the sample briefing to `report.docx`.
    #[command(name = "report")]
    Report,

    /// Render the sample briefing once per style preset under
    /// `target/run_all_samples`.
    #[command(name = "run-all", aliases = ["run_all", "all"])]
    RunAll,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report => docx_helper::examples::report::run(),
        Commands::RunAll => docx_helper::examples::run_all::run(),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
