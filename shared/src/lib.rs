//! Shared types, models and page logic for the Obras Inventory platform
//!
//! This crate contains the domain shared between the host application and the
//! browser front-end (via WASM): materials, works ("obras"), stock movements,
//! their page controllers and the cached material store.

pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod store;
pub mod totals;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use pages::*;
pub use store::*;
pub use totals::*;
pub use types::*;
