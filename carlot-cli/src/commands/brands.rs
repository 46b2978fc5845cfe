//! Brands command - list available brand families.

use anyhow::Result;
use carlot_brands::BrandRegistry;
use std::io::{self, Write};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the brands command, writing to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&mut out, cli)
}

/// Runs the brands command, writing results to `out`.
pub fn run_to<W: Write>(out: &mut W, cli: &Cli) -> Result<()> {
    info!("Listing brands");

    let brands = BrandRegistry::all();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            writeln!(out, "{}", formatter.format_brands_header())?;
            writeln!(out, "{}", "─".repeat(50))?;

            for desc in brands {
                writeln!(out, "{}", formatter.format_brand_line(desc))?;
            }

            writeln!(out)?;
            writeln!(out, "Total: {} brands", brands.len())?;
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            writeln!(out, "{}", formatter.format_brands(brands)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn capture(argv: &[&str]) -> String {
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut buf = Vec::new();
        run_to(&mut buf, &cli).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_listing() {
        let output = capture(&["carlot", "brands", "--no-color"]);
        assert!(output.contains("Mazda"));
        assert!(output.contains("Mustang"));
        assert!(output.trim_end().ends_with("Total: 2 brands"));
    }

    #[test]
    fn test_json_listing() {
        let output = capture(&["carlot", "brands", "-f", "json"]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let brands = value.as_array().unwrap();

        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0]["id"], "mazda");
        assert_eq!(brands[0]["sportsPrice"], 26960);
        assert_eq!(brands[1]["aliases"], serde_json::json!(["mustang", "mondeo"]));
    }
}
