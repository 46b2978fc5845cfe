//! Brand descriptor system.
//!
//! A descriptor contains all the static configuration for a brand family:
//! - Metadata (display name, model names)
//! - CLI configuration (name and aliases)
//! - The constructor for the brand's factory

use carlot_core::{Brand, CarFactory, CoreError};
use serde::Serialize;

// ============================================================================
// Brand Descriptor
// ============================================================================

/// Constructor for a brand's factory.
pub type FactoryFn = fn() -> Box<dyn CarFactory>;

/// Complete descriptor for a brand family.
pub struct BrandDescriptor {
    /// Brand identifier.
    pub id: Brand,
    /// Display metadata.
    pub metadata: BrandMetadata,
    /// CLI naming.
    pub cli: CliConfig,
    /// Builds a fresh factory for this brand.
    pub build_factory: FactoryFn,
}

impl BrandDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder(id: Brand) -> BrandDescriptorBuilder {
        BrandDescriptorBuilder::new(id)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.metadata.display_name
    }

    /// Returns the CLI name.
    pub fn cli_name(&self) -> &str {
        self.cli.name
    }

    /// Builds a fresh factory for this brand.
    pub fn make_factory(&self) -> Box<dyn CarFactory> {
        (self.build_factory)()
    }
}

impl std::fmt::Debug for BrandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrandDescriptor")
            .field("id", &self.id)
            .field("metadata", &self.metadata)
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Brand Metadata
// ============================================================================

/// Display information for a brand family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandMetadata {
    /// Brand name shown to users.
    pub display_name: String,
    /// Model name of the brand's sports car.
    pub sports_model: String,
    /// Model name of the brand's family car.
    pub family_model: String,
}

impl BrandMetadata {
    /// Creates metadata with model names left blank.
    pub fn for_brand(id: Brand) -> Self {
        Self {
            display_name: id.display_name().to_string(),
            sports_model: String::new(),
            family_model: String::new(),
        }
    }
}

// ============================================================================
// CLI Config
// ============================================================================

/// How a brand is named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Primary CLI name.
    pub name: &'static str,
    /// Alternative names, such as model names.
    pub aliases: &'static [&'static str],
}

impl CliConfig {
    /// Returns the default CLI config for a brand.
    pub fn for_brand(id: Brand) -> Self {
        Self {
            name: id.cli_name(),
            aliases: &[],
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`BrandDescriptor`].
pub struct BrandDescriptorBuilder {
    id: Brand,
    metadata: Option<BrandMetadata>,
    cli: Option<CliConfig>,
    build_factory: Option<FactoryFn>,
}

impl BrandDescriptorBuilder {
    /// Creates a new builder for the given brand.
    pub fn new(id: Brand) -> Self {
        Self {
            id,
            metadata: None,
            cli: None,
            build_factory: None,
        }
    }

    /// Sets the metadata.
    pub fn metadata(mut self, metadata: BrandMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the CLI configuration.
    pub fn cli(mut self, cli: CliConfig) -> Self {
        self.cli = Some(cli);
        self
    }

    /// Sets the factory constructor.
    pub fn factory(mut self, build_factory: FactoryFn) -> Self {
        self.build_factory = Some(build_factory);
        self
    }

    /// Builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if no factory constructor was set.
    pub fn build(self) -> Result<BrandDescriptor, CoreError> {
        let build_factory = self.build_factory.ok_or_else(|| {
            CoreError::InvalidConfig(format!("brand {} has no factory", self.id.cli_name()))
        })?;

        Ok(BrandDescriptor {
            id: self.id,
            metadata: self.metadata.unwrap_or_else(|| BrandMetadata::for_brand(self.id)),
            cli: self.cli.unwrap_or_else(|| CliConfig::for_brand(self.id)),
            build_factory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazda::MazdaFactory;

    #[test]
    fn test_builder_requires_factory() {
        let err = BrandDescriptor::builder(Brand::Ford).build().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidConfig("brand ford has no factory".to_string())
        );
    }

    #[test]
    fn test_builder_fills_defaults() {
        let desc = BrandDescriptor::builder(Brand::Mazda)
            .factory(|| Box::new(MazdaFactory::new()))
            .build()
            .unwrap();

        assert_eq!(desc.display_name(), "Mazda");
        assert_eq!(desc.cli_name(), "mazda");
        assert!(desc.cli.aliases.is_empty());
    }

    #[test]
    fn test_builder_accepts_mismatched_factory() {
        // Pairing a brand with another brand's factory is a convention,
        // so the builder does not reject it.
        let desc = BrandDescriptor::builder(Brand::Ford)
            .factory(|| Box::new(MazdaFactory::new()))
            .build()
            .unwrap();

        let family = desc.make_factory().make_family_car();
        assert_eq!(family.price().to_string(), "22050");
    }
}
