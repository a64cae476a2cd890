//! Domain models for the Obras Inventory platform

mod material;
mod movement;
mod obra;
pub mod seed;

pub use material::*;
pub use movement::*;
pub use obra::*;
