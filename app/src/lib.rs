//! Obras Inventory - host application
//!
//! Wires the shared material store to a directory of JSON files and to the
//! HTTP material snapshot, and carries the configuration and logging setup of
//! the `obras-inventory` binary.

pub mod config;
pub mod error;
pub mod external;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use external::HttpSnapshotClient;
pub use storage::FileStore;

use shared::services::MaterialService;

/// Material store backed by local files and the HTTP snapshot
pub type CatalogService = MaterialService<FileStore, HttpSnapshotClient>;

/// Build the material store described by `config`
pub fn catalog_service(config: &Config) -> AppResult<CatalogService> {
    let store = FileStore::new(config.storage.dir.clone());
    let source = HttpSnapshotClient::from_config(&config.snapshot)?;
    Ok(MaterialService::new(store, source))
}
