//! Ford products.

use carlot_core::{upgrade_message, FamilyCar, Price, SportsCar};

/// The Ford Mustang sports car.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FordMustang;

impl FordMustang {
    /// Fixed list price.
    pub const PRICE: Price = Price::dollars(27205);
}

impl SportsCar for FordMustang {
    fn price(&self) -> Price {
        Self::PRICE
    }
}

/// The Ford Mondeo family car.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FordMondeo;

impl FordMondeo {
    /// Fixed list price.
    pub const PRICE: Price = Price::dollars(22100);
}

impl FamilyCar for FordMondeo {
    fn price(&self) -> Price {
        Self::PRICE
    }

    fn upgrade_cost(&self, other: &dyn SportsCar) -> String {
        upgrade_message(other.price() - self.price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazda::MazdaMx5;

    #[test]
    fn test_prices() {
        assert_eq!(FordMustang.price(), Price::dollars(27205));
        assert_eq!(FordMondeo.price(), Price::dollars(22100));
    }

    #[test]
    fn test_upgrade_to_mustang() {
        assert_eq!(
            FordMondeo.upgrade_cost(&FordMustang),
            "To upgrade it would to a sports car, it would cost $5105"
        );
    }

    #[test]
    fn test_upgrade_to_mx5_is_permitted() {
        assert!(FordMondeo.upgrade_cost(&MazdaMx5).ends_with("$4860"));
    }
}
