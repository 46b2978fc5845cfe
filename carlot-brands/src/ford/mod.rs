//! Ford brand family.
//!
//! The Mustang coupe and the Mondeo saloon.

mod cars;
mod descriptor;
mod factory;

pub use cars::{FordMondeo, FordMustang};
pub use descriptor::ford_descriptor;
pub use factory::FordFactory;
