//! Text output formatting.

use carlot_brands::BrandDescriptor;
use carlot_core::ClientReport;

use super::json::QuoteOutput;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Text formatter with optional colors.
///
/// Result lines (prices and upgrade messages) are always plain so they can
/// be compared and piped; only listings are styled.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats one client run as two lines: price, then upgrade message.
    pub fn format_report(&self, report: &ClientReport) -> String {
        report.lines().join("\n")
    }

    /// Formats a cross-brand quote.
    pub fn format_quote(&self, quote: &QuoteOutput) -> String {
        quote.upgrade_message.clone()
    }

    /// Formats brand list header.
    pub fn format_brands_header(&self) -> String {
        format!(
            "{} {} {} {}",
            self.bold(&format!("{:<8}", "Brand")),
            self.bold(&format!("{:<8}", "CLI")),
            self.bold(&format!("{:<18}", "Sports car")),
            self.bold("Family car"),
        )
    }

    /// Formats a single brand line.
    pub fn format_brand_line(&self, desc: &BrandDescriptor) -> String {
        let factory = desc.make_factory();
        let sports = format!(
            "{} ({})",
            desc.metadata.sports_model,
            factory.make_sports_car().price()
        );
        let family = format!(
            "{} ({})",
            desc.metadata.family_model,
            factory.make_family_car().price()
        );

        let mut line = format!(
            "{:<8} {:<8} {:<18} {}",
            desc.display_name(),
            desc.cli_name(),
            sports,
            family
        );

        if !desc.cli.aliases.is_empty() {
            line.push_str(&format!("  {}", self.dim(&desc.cli.aliases.join(", "))));
        }

        line
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}
