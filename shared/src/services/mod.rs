//! Data-access services

pub mod material;

pub use material::{MaterialService, SnapshotSource};
