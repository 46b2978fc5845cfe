//! Ford brand descriptor.

use carlot_core::{Brand, CarFactory};

use super::factory::FordFactory;
use crate::descriptor::{BrandDescriptor, BrandMetadata, CliConfig};

/// Returns the Ford brand descriptor.
pub fn ford_descriptor() -> BrandDescriptor {
    BrandDescriptor {
        id: Brand::Ford,
        metadata: ford_metadata(),
        cli: ford_cli_config(),
        build_factory: build_ford_factory,
    }
}

fn ford_metadata() -> BrandMetadata {
    BrandMetadata {
        display_name: "Ford".to_string(),
        sports_model: "Mustang".to_string(),
        family_model: "Mondeo".to_string(),
    }
}

fn ford_cli_config() -> CliConfig {
    CliConfig {
        name: "ford",
        aliases: &["mustang", "mondeo"],
    }
}

fn build_ford_factory() -> Box<dyn CarFactory> {
    Box::new(FordFactory::new())
}
