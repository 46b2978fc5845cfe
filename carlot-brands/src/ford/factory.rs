//! Ford factory.

use carlot_core::{CarFactory, FamilyCar, SportsCar};
use tracing::trace;

use super::cars::{FordMondeo, FordMustang};

/// Makes Ford products: the Mustang and the Mondeo.
#[derive(Debug, Clone, Copy, Default)]
pub struct FordFactory;

impl FordFactory {
    /// Creates a new factory.
    pub fn new() -> Self {
        Self
    }
}

impl CarFactory for FordFactory {
    fn make_sports_car(&self) -> Box<dyn SportsCar> {
        trace!("making Ford Mustang");
        Box::new(FordMustang)
    }

    fn make_family_car(&self) -> Box<dyn FamilyCar> {
        trace!("making Ford Mondeo");
        Box::new(FordMondeo)
    }
}
