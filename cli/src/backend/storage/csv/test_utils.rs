//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! This module provides RAII-based cleanup that guarantees test data is removed
//! even if tests panic or fail.

use anyhow::Result;
use shared::{InventoryConfig, DEFAULT_INVENTORY_FILE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::record_repository::CsvRecordRepository;

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// The CSV connection for the test
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// Config pointing at the default inventory file in this environment
    pub fn config(&self) -> InventoryConfig {
        InventoryConfig {
            data_directory: self.base_path.clone(),
            file_name: DEFAULT_INVENTORY_FILE.to_string(),
        }
    }

    /// Repository for the default inventory file
    pub fn repository(&self) -> CsvRecordRepository {
        CsvRecordRepository::new(self.connection.clone(), DEFAULT_INVENTORY_FILE)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.connection.file_path(DEFAULT_INVENTORY_FILE)
    }

    /// Put raw bytes in the inventory file, bypassing the repository
    pub fn write_raw(&self, contents: &[u8]) {
        fs::write(self.inventory_path(), contents).expect("Failed to write raw inventory file");
    }

    /// Read the inventory file as text, bypassing the repository
    pub fn read_raw(&self) -> String {
        fs::read_to_string(self.inventory_path()).expect("Failed to read raw inventory file")
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        // TempDir removes the directory itself
        if std::env::var("CD_INVENTORY_DEBUG_TESTS").is_ok() {
            println!("🧹 Cleaning up test environment: {:?}", self.base_path);
        }
    }
}
