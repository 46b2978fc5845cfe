//! Showroom command - run the client against each brand's factory.

use anyhow::Result;
use carlot_brands::{BrandDescriptor, BrandRegistry};
use carlot_core::{Client, ClientReport};
use clap::Args;
use std::io::{self, Write};
use tracing::info;

use super::lookup_brand;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the showroom command.
#[derive(Args, Debug, Default)]
pub struct ShowroomArgs {
    /// Only run this brand (name or model alias).
    #[arg(long, short)]
    pub brand: Option<String>,
}

/// Runs the showroom command, writing to stdout.
pub fn run(args: &ShowroomArgs, cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&mut out, args, cli)
}

/// Runs the showroom command, writing results to `out`.
pub fn run_to<W: Write>(out: &mut W, args: &ShowroomArgs, cli: &Cli) -> Result<()> {
    let descriptors: Vec<&'static BrandDescriptor> = match &args.brand {
        Some(name) => vec![lookup_brand(name)?],
        None => BrandRegistry::all().iter().collect(),
    };

    let client = Client::new();
    let reports: Vec<(&BrandDescriptor, ClientReport)> = descriptors
        .into_iter()
        .map(|desc| {
            info!(brand = %desc.id, "running client");
            let factory = desc.make_factory();
            (desc, client.run(factory.as_ref()))
        })
        .collect();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for (_, report) in &reports {
                writeln!(out, "{}", formatter.format_report(report))?;
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            writeln!(out, "{}", formatter.format_showroom(&reports)?)?;
        }
    }

    Ok(())
}
