//! Mazda factory.

use carlot_core::{CarFactory, FamilyCar, SportsCar};
use tracing::trace;

use super::cars::{MazdaCx30, MazdaMx5};

/// Makes Mazda products: the MX-5 and the CX-30.
#[derive(Debug, Clone, Copy, Default)]
pub struct MazdaFactory;

impl MazdaFactory {
    /// Creates a new factory.
    pub fn new() -> Self {
        Self
    }
}

impl CarFactory for MazdaFactory {
    fn make_sports_car(&self) -> Box<dyn SportsCar> {
        trace!("making Mazda MX-5");
        Box::new(MazdaMx5)
    }

    fn make_family_car(&self) -> Box<dyn FamilyCar> {
        trace!("making Mazda CX-30");
        Box::new(MazdaCx30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makes_matched_pair() {
        let factory = MazdaFactory::new();
        assert_eq!(factory.make_sports_car().price(), MazdaMx5::PRICE);
        assert_eq!(factory.make_family_car().price(), MazdaCx30::PRICE);
    }

    #[test]
    fn test_each_call_returns_independent_car() {
        let factory = MazdaFactory::new();
        let first = factory.make_sports_car();
        let second = factory.make_sports_car();
        assert_eq!(first.price(), second.price());

        drop(first);
        assert_eq!(second.price(), MazdaMx5::PRICE);
    }
}
