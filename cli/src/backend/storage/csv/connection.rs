use anyhow::{Context, Result};
use log::info;
use shared::InventoryConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// CsvConnection owns the data directory the inventory file lives in
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection for the data directory named in the config
    pub fn from_config(config: &InventoryConfig) -> Result<Self> {
        Self::new(&config.data_directory)
    }

    /// Path of a data file inside the base directory
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("inventory").join("data");

        let connection = CsvConnection::new(&nested).expect("Failed to create connection");

        assert!(nested.is_dir());
        assert_eq!(connection.file_path("CDInventory.csv"), nested.join("CDInventory.csv"));
    }

    #[test]
    fn test_file_path_joins_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = InventoryConfig {
            data_directory: temp_dir.path().to_path_buf(),
            ..InventoryConfig::default()
        };

        let connection = CsvConnection::from_config(&config).unwrap();

        assert_eq!(
            connection.file_path(&config.file_name),
            config.inventory_path()
        );
    }
}
