//! Brand registry for managing all brand descriptors.
//!
//! The registry provides static access to every brand family and is the
//! central point for looking brands up by id or CLI name.

use carlot_core::Brand;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use crate::descriptor::BrandDescriptor;
use crate::ford::ford_descriptor;
use crate::mazda::mazda_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all brand descriptors.
static DESCRIPTORS: OnceLock<Vec<BrandDescriptor>> = OnceLock::new();

/// Static storage for CLI name to brand mapping.
static CLI_NAME_MAP: OnceLock<HashMap<String, Brand>> = OnceLock::new();

/// Initializes all brand descriptors in showroom order.
fn init_descriptors() -> Vec<BrandDescriptor> {
    let descriptors = vec![mazda_descriptor(), ford_descriptor()];
    debug!(count = descriptors.len(), "brand registry initialized");
    descriptors
}

/// Builds the CLI name to brand mapping.
fn build_cli_name_map(descriptors: &[BrandDescriptor]) -> HashMap<String, Brand> {
    let mut map = HashMap::new();

    for desc in descriptors {
        map.insert(desc.cli.name.to_string(), desc.id);

        for alias in desc.cli.aliases {
            map.insert((*alias).to_string(), desc.id);
        }
    }

    map
}

// ============================================================================
// Brand Registry
// ============================================================================

/// Global registry of all brand descriptors.
///
/// Initialized lazily on first access.
pub struct BrandRegistry;

impl BrandRegistry {
    /// Returns all brand descriptors, Mazda first.
    pub fn all() -> &'static [BrandDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a brand descriptor by id.
    pub fn get(id: Brand) -> Option<&'static BrandDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the CLI name to brand mapping.
    pub fn cli_name_map() -> &'static HashMap<String, Brand> {
        CLI_NAME_MAP.get_or_init(|| build_cli_name_map(Self::all()))
    }

    /// Looks up a brand by CLI name or alias, ignoring case.
    pub fn get_by_cli_name(name: &str) -> Option<&'static BrandDescriptor> {
        let brand = Self::cli_name_map().get(&name.trim().to_ascii_lowercase())?;
        Self::get(*brand)
    }

    /// Returns the number of registered brands.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Returns all registered brands.
    pub fn brands() -> Vec<Brand> {
        Self::all().iter().map(|d| d.id).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
