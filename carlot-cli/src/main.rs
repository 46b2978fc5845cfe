// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Carlot CLI - an abstract factory showroom.
//!
//! # Examples
//!
//! ```bash
//! # Run the client against every brand's factory
//! carlot
//!
//! # Only one brand
//! carlot showroom --brand ford
//!
//! # List brands
//! carlot brands
//!
//! # Pair a family car with another brand's sports car
//! carlot quote --family mazda --sports ford
//!
//! # JSON output
//! carlot --format json --pretty
//! ```

mod commands;
mod output;

use anyhow::Result;
use carlot_core::CoreError;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{brands, quote, showroom};

// ============================================================================
// CLI Definition
// ============================================================================

/// Carlot CLI - matched sports and family cars per brand.
#[derive(Parser)]
#[command(name = "carlot")]
#[command(about = "Abstract factory showroom for sports and family cars")]
#[command(long_about = r#"
Carlot asks each brand's factory for a sports car and a family car, then
reports the family car's price and what upgrading to the sports car costs.

Supported brands:
  • Mazda (mazda) - MX-5 / CX-30
  • Ford (ford)   - Mustang / Mondeo

Examples:
  carlot                                 # Every brand, in order
  carlot showroom --brand ford           # Single brand
  carlot quote --family mazda --sports ford
  carlot --format json                   # JSON output
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'showroom' for every brand.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, errors only as exit code).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the client against each brand's factory (default).
    #[command(visible_alias = "s")]
    Showroom(showroom::ShowroomArgs),

    /// List available brands.
    #[command(visible_alias = "b")]
    Brands,

    /// Quote an upgrade between any two brands.
    #[command(visible_alias = "q")]
    Quote(quote::QuoteArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Brand not found.
    UnknownBrand = 2,
}

impl ExitCode {
    /// Picks the exit code for a failed command.
    fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CoreError>() {
            Some(CoreError::UnknownBrand(_)) => Self::UnknownBrand,
            _ => Self::Error,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("carlot=debug,carlot_core=debug,carlot_brands=debug,info")
        } else {
            EnvFilter::new("carlot=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Showroom(args)) => showroom::run(args, &cli),
        Some(Commands::Brands) => brands::run(&cli),
        Some(Commands::Quote(args)) => quote::run(args, &cli),
        None => showroom::run(&showroom::ShowroomArgs::default(), &cli),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_parses_to_default_showroom() {
        let cli = Cli::try_parse_from(["carlot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["carlot", "brands", "--format", "json", "--pretty"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Brands)));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.pretty);
    }

    #[test]
    fn test_unknown_brand_maps_to_exit_code() {
        let err = anyhow::Error::new(CoreError::UnknownBrand("tesla".to_string()));
        assert_eq!(ExitCode::for_error(&err) as i32, 2);

        let other = anyhow::anyhow!("boom");
        assert_eq!(ExitCode::for_error(&other) as i32, 1);
    }
}
