//! Output formatting for CLI.

mod json;
mod text;

pub use json::{JsonFormatter, QuoteOutput};
pub use text::TextFormatter;
