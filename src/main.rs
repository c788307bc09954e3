//! rust_volcano command-line interface

use clap::Parser;
use log::LevelFilter;

use rust_volcano::cli::Cli;
use rust_volcano::report::run_report;

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let Some(file_path) = cli.file_path.clone() else {
        eprintln!("Please provide the path to the CSV file using -f or --file_path option.");
        std::process::exit(2);
    };

    let config = cli.report_config(file_path);

    match run_report(&config) {
        Ok(outcome) => {
            println!("{}", outcome.summary);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
