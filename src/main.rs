use anyhow::Context;
use clap::Parser;
use pymodaq_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and exit
    let Some(command) = args.command else {
        if let Err(error) = Args::write_help(&mut std::io::stdout()) {
            eprintln!("Failed to print help: {}", error);
            process::exit(1);
        }
        process::exit(0);
    };

    let input_file = command.common().input_file().display().to_string();
    let result = commands::run(command)
        .with_context(|| format!("Failed to process measurement file '{}'", input_file));

    match result {
        Ok(_stats) => {
            // Success - output has already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
