//! Quote command - pair a family car with any brand's sports car.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use tracing::info;

use super::lookup_brand;
use crate::output::{JsonFormatter, QuoteOutput, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the quote command.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Brand whose family car is being traded up.
    #[arg(long)]
    pub family: String,

    /// Brand whose sports car is the upgrade target.
    #[arg(long)]
    pub sports: String,
}

/// Runs the quote command, writing to stdout.
pub fn run(args: &QuoteArgs, cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&mut out, args, cli)
}

/// Runs the quote command, writing results to `out`.
pub fn run_to<W: Write>(out: &mut W, args: &QuoteArgs, cli: &Cli) -> Result<()> {
    let family_desc = lookup_brand(&args.family)?;
    let sports_desc = lookup_brand(&args.sports)?;

    info!(family = %family_desc.id, sports = %sports_desc.id, "quoting upgrade");

    let family = family_desc.make_factory().make_family_car();
    let sports = sports_desc.make_factory().make_sports_car();

    let family_price = family.price();
    let sports_price = sports.price();
    let quote = QuoteOutput {
        family: family_desc.id,
        sports: sports_desc.id,
        family_price,
        sports_price,
        delta: sports_price - family_price,
        upgrade_message: family.upgrade_cost(sports.as_ref()),
    };

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            writeln!(out, "{}", formatter.format_quote(&quote))?;
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            writeln!(out, "{}", formatter.format(&quote)?)?;
        }
    }

    Ok(())
}
