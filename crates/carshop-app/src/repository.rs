//! Repository adapters for persistence layer

use std::path::PathBuf;

use tracing::debug;

use carshop_infra::persistence::FileRecordGateway;
use carshop_store::RecordStore;
use carshop_types::Result;

use crate::config::Config;

/// Record store persisted to a flat text file
pub type FileRecordStore = RecordStore<FileRecordGateway>;

/// Open the record store at the configured data file
pub fn open_store(config: &Config) -> Result<FileRecordStore> {
    open_store_at(config.data_file()?)
}

/// Open the record store at a custom data file
pub fn open_store_at(data_file: PathBuf) -> Result<FileRecordStore> {
    debug!(path = %data_file.display(), "opening vehicle store");
    RecordStore::open(FileRecordGateway::new(data_file))
}
