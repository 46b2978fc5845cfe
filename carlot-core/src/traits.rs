//! Capability traits for Carlot.
//!
//! This module defines the three capability sets a brand family must
//! implement. Callers depend on these alone and never on a concrete variant.

use std::fmt::Debug;

use crate::models::Price;

/// A sports car from any brand family.
pub trait SportsCar: Debug + Send + Sync {
    /// Returns the fixed list price of this model.
    fn price(&self) -> Price;
}

/// A family car from any brand family.
pub trait FamilyCar: Debug + Send + Sync {
    /// Returns the fixed list price of this model.
    fn price(&self) -> Price;

    /// Quotes what it would cost to trade this car up to `other`.
    ///
    /// Any sports car is accepted, including one from another brand family.
    /// Matching brands is a convention kept by the factories, not something
    /// checked here.
    fn upgrade_cost(&self, other: &dyn SportsCar) -> String;
}

/// Produces a matched pair of products from one brand family.
///
/// Every call returns a freshly constructed, independent product.
pub trait CarFactory: Debug + Send + Sync {
    /// Makes the brand's sports car.
    fn make_sports_car(&self) -> Box<dyn SportsCar>;

    /// Makes the brand's family car.
    fn make_family_car(&self) -> Box<dyn FamilyCar>;
}

/// Renders the upgrade sentence for a price difference.
///
/// Negative differences are rendered as-is.
pub fn upgrade_message(delta: Price) -> String {
    format!("To upgrade it would to a sports car, it would cost ${delta}")
}
