//! Command-line argument definitions for PyMoDAQ processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::Result;
use crate::config::ParserConfig;
use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_LOG_LEVEL};
use clap::{Args as ClapArgs, CommandFactory, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// CLI arguments for the PyMoDAQ measurement processor
///
/// Reads PyMoDAQ simple measurement files (a subject/date header followed by
/// named intensity/time channels) and reports, validates or converts them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pymodaq-processor",
    version,
    about = "Inspect, validate and convert PyMoDAQ simple measurement files",
    long_about = "Parses PyMoDAQ simple measurement files: a header row with the subject name and \
                  recording date, followed by three-row channel blocks (name, intensity samples, \
                  time samples). Structural problems abort with an error; channels whose intensity \
                  and time lengths differ are kept and reported as diagnostics."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Write the top-level help, shown when no subcommand is given
    pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
        let help = Self::command().render_help();
        writeln!(out, "{}", help)
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the header, channel summary and diagnostics of a file
    Inspect(InspectArgs),
    /// Check a file and exit non-zero if it is malformed
    Validate(ValidateArgs),
    /// Convert a file to JSON or to the canonical delimited format
    Convert(ConvertArgs),
}

impl Commands {
    /// Options shared by every subcommand
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Inspect(args) => &args.common,
            Commands::Validate(args) => &args.common,
            Commands::Convert(args) => &args.common,
        }
    }
}

/// Input and logging options shared by all subcommands
#[derive(Debug, Clone, ClapArgs)]
pub struct CommonArgs {
    /// Measurement file to read
    #[arg(value_name = "FILE")]
    pub input_file: PathBuf,

    /// Field delimiter: a single character, or `tab`, `comma`, `semicolon`
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: String,

    /// chrono layout of the header date
    #[arg(long = "date-format", value_name = "FORMAT", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Treat blank lines at the end of the file as rows instead of dropping them
    #[arg(long = "keep-trailing-blank-lines")]
    pub keep_trailing_blank_lines: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommonArgs {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    /// Build and validate the parser configuration from the flags
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let mut config = ParserConfig::default()
            .with_delimiter(ParserConfig::parse_delimiter(&self.delimiter)?)
            .with_date_format(self.date_format.clone());
        if self.keep_trailing_blank_lines {
            config = config.keep_trailing_blank_lines();
        }
        config.validate()?;
        Ok(config)
    }

    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, ClapArgs)]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Debug, Clone, ClapArgs)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Fail when any diagnostic is reported, not only on structural errors
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for the convert command
#[derive(Debug, Clone, ClapArgs)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub output_format: ConvertFormat,
}

/// Report formats for inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Target formats for convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConvertFormat {
    /// Pretty-printed JSON document
    Json,
    /// Canonical delimited measurement format
    Csv,
}
