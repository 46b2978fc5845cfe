//! Mazda brand descriptor.

use carlot_core::{Brand, CarFactory};

use super::factory::MazdaFactory;
use crate::descriptor::{BrandDescriptor, BrandMetadata, CliConfig};

/// Returns the Mazda brand descriptor.
pub fn mazda_descriptor() -> BrandDescriptor {
    BrandDescriptor {
        id: Brand::Mazda,
        metadata: mazda_metadata(),
        cli: mazda_cli_config(),
        build_factory: build_mazda_factory,
    }
}

fn mazda_metadata() -> BrandMetadata {
    BrandMetadata {
        display_name: "Mazda".to_string(),
        sports_model: "MX-5".to_string(),
        family_model: "CX-30".to_string(),
    }
}

fn mazda_cli_config() -> CliConfig {
    CliConfig {
        name: "mazda",
        aliases: &["mx5", "cx30"],
    }
}

fn build_mazda_factory() -> Box<dyn CarFactory> {
    Box::new(MazdaFactory::new())
}
