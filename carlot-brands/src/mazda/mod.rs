//! Mazda brand family.
//!
//! The MX-5 roadster and the CX-30 crossover.

mod cars;
mod descriptor;
mod factory;

pub use cars::{MazdaCx30, MazdaMx5};
pub use descriptor::mazda_descriptor;
pub use factory::MazdaFactory;
