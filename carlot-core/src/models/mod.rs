//! Domain models for Carlot.
//!
//! ## Submodules
//!
//! - [`brand`] - Brand families
//! - [`price`] - Exact monetary amounts

mod brand;
mod price;

// Re-export everything at the models level
pub use brand::Brand;
pub use price::Price;
