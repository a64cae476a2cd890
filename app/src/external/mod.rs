//! External API integrations

pub mod snapshot;

pub use snapshot::HttpSnapshotClient;
