// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Carlot Brands
//!
//! Concrete brand families for Carlot.
//!
//! Each brand module includes:
//!
//! - **Cars**: the brand's sports car and family car
//! - **Factory**: the [`CarFactory`](carlot_core::CarFactory) that makes them
//! - **Descriptor**: static configuration (names, CLI aliases, factory constructor)
//!
//! ## Supported Brands
//!
//! | Brand | Sports car | Price | Family car | Price |
//! |-------|------------|-------|------------|-------|
//! | Mazda | MX-5 | 26960 | CX-30 | 22050 |
//! | Ford | Mustang | 27205 | Mondeo | 22100 |
//!
//! ## Usage
//!
//! ```
//! use carlot_brands::BrandRegistry;
//! use carlot_core::{Brand, Client};
//!
//! let desc = BrandRegistry::get(Brand::Mazda).unwrap();
//! let factory = desc.make_factory();
//! let report = Client::new().run(factory.as_ref());
//! assert_eq!(report.family_price.to_string(), "22050");
//! ```

pub mod descriptor;
pub mod registry;

// Brand modules (alphabetical)
pub mod ford;
pub mod mazda;

// Re-export key types
pub use descriptor::{BrandDescriptor, BrandDescriptorBuilder, BrandMetadata, CliConfig};
pub use registry::BrandRegistry;

// Re-export brand descriptors
pub use ford::ford_descriptor;
pub use mazda::mazda_descriptor;

// Re-export product and factory types for convenience
pub use ford::{FordFactory, FordMondeo, FordMustang};
pub use mazda::{MazdaCx30, MazdaFactory, MazdaMx5};
