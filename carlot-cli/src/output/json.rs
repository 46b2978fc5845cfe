//! JSON output formatting.

use anyhow::Result;
use carlot_brands::BrandDescriptor;
use carlot_core::{Brand, ClientReport, Price};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for one client run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowroomOutput<'a> {
    pub brand: Brand,
    pub sports_model: &'a str,
    pub family_model: &'a str,
    pub family_price: Price,
    pub upgrade_message: &'a str,
}

/// JSON output for a brand listing entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfoOutput<'a> {
    pub id: Brand,
    pub display_name: &'a str,
    pub cli_name: &'a str,
    pub aliases: &'a [&'static str],
    pub sports_model: &'a str,
    pub sports_price: Price,
    pub family_model: &'a str,
    pub family_price: Price,
}

/// An upgrade quote between two brands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    pub family: Brand,
    pub sports: Brand,
    pub family_price: Price,
    pub sports_price: Price,
    pub delta: Price,
    pub upgrade_message: String,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes any value, honoring the pretty flag.
    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    /// Formats the results of a showroom run.
    pub fn format_showroom(&self, reports: &[(&BrandDescriptor, ClientReport)]) -> Result<String> {
        let outputs: Vec<ShowroomOutput<'_>> = reports
            .iter()
            .map(|(desc, report)| ShowroomOutput {
                brand: desc.id,
                sports_model: &desc.metadata.sports_model,
                family_model: &desc.metadata.family_model,
                family_price: report.family_price,
                upgrade_message: &report.upgrade_message,
            })
            .collect();

        self.format(&outputs)
    }

    /// Formats the brand listing.
    pub fn format_brands(&self, brands: &[BrandDescriptor]) -> Result<String> {
        let outputs: Vec<BrandInfoOutput<'_>> = brands
            .iter()
            .map(|desc| {
                let factory = desc.make_factory();
                BrandInfoOutput {
                    id: desc.id,
                    display_name: desc.display_name(),
                    cli_name: desc.cli_name(),
                    aliases: desc.cli.aliases,
                    sports_model: &desc.metadata.sports_model,
                    sports_price: factory.make_sports_car().price(),
                    family_model: &desc.metadata.family_model,
                    family_price: factory.make_family_car().price(),
                }
            })
            .collect();

        self.format(&outputs)
    }
}
