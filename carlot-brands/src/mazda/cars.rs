//! Mazda products.

use carlot_core::{upgrade_message, FamilyCar, Price, SportsCar};

/// The Mazda MX-5 sports car.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazdaMx5;

impl MazdaMx5 {
    /// Fixed list price.
    pub const PRICE: Price = Price::dollars(26960);
}

impl SportsCar for MazdaMx5 {
    fn price(&self) -> Price {
        Self::PRICE
    }
}

/// The Mazda CX-30 family car.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MazdaCx30;

impl MazdaCx30 {
    /// Fixed list price.
    pub const PRICE: Price = Price::dollars(22050);
}

impl FamilyCar for MazdaCx30 {
    fn price(&self) -> Price {
        Self::PRICE
    }

    fn upgrade_cost(&self, other: &dyn SportsCar) -> String {
        upgrade_message(other.price() - self.price())
    }
}
