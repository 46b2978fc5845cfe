//! CLI command implementations.

pub mod brands;
pub mod quote;
pub mod showroom;

use anyhow::Result;
use carlot_brands::{BrandDescriptor, BrandRegistry};
use carlot_core::CoreError;

/// Resolves a brand name or alias given on the command line.
pub fn lookup_brand(name: &str) -> Result<&'static BrandDescriptor> {
    BrandRegistry::get_by_cli_name(name)
        .ok_or_else(|| CoreError::UnknownBrand(name.to_string()).into())
}
