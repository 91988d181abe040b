mod cli;
mod error;
mod exporter;
mod fmt;
mod loader;
mod models;
mod normalizer;
mod reconciler;
mod reports;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            reference_file,
            other_file,
            date_delta,
            show_matches,
            output_file,
            matches_file,
            strict,
        } => cli::compare::run(
            &reference_file,
            &other_file,
            date_delta,
            show_matches,
            output_file.as_deref(),
            matches_file.as_deref(),
            strict,
        ),
        Commands::Filter {
            input_dir,
            output_dir,
            keep,
            rename,
        } => cli::filter::run(&input_dir, output_dir.as_deref(), &keep, &rename),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
