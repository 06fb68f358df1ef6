//! # Backend Module
//!
//! Contains all non-UI logic for the CD inventory.
//!
//! ## Architecture
//!
//! ```text
//! Control loop (app)
//!     ↓
//! IO Layer (console menu, prompts, inventory table)
//! Domain Layer (record operations)
//!     ↓
//! Storage Layer (CSV inventory file)
//! ```
//!
//! The layers only meet in the control loop, which owns the one
//! [`shared::RecordStore`] for the session.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::InventoryConfig;

pub use storage::{CsvRecordRepository, InventoryStorage, StorageError};

/// Set up the storage backend for the configured inventory file
pub fn initialize_storage(config: &InventoryConfig) -> Result<CsvRecordRepository> {
    info!("Setting up inventory storage in {}", config.data_directory.display());
    let repository = CsvRecordRepository::from_config(config)?;
    info!("Inventory file: {}", repository.location().display());
    Ok(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;

    #[test]
    fn test_initialize_storage_uses_configured_file() {
        let env = TestEnvironment::new().unwrap();
        let config = env.config();

        let storage = initialize_storage(&config).expect("Failed to initialize storage");

        assert_eq!(storage.location(), config.inventory_path());
    }
}
