use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, error, info, warn};
use shared::{CdRecord, InventoryConfig, RecordStore};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use super::connection::CsvConnection;
use crate::backend::storage::{InventoryStorage, StorageError};

/// Column layout of the inventory file
const HEADER: [&str; 3] = ["id", "title", "artist"];

/// CSV-based inventory repository backed by a single file
#[derive(Debug, Clone)]
pub struct CsvRecordRepository {
    connection: CsvConnection,
    file_name: String,
}

impl CsvRecordRepository {
    /// Create a new repository for `file_name` inside the connection's directory
    pub fn new(connection: CsvConnection, file_name: impl Into<String>) -> Self {
        Self {
            connection,
            file_name: file_name.into(),
        }
    }

    /// Create a repository for the inventory file named in the config
    pub fn from_config(config: &InventoryConfig) -> anyhow::Result<Self> {
        let connection = CsvConnection::from_config(config)?;
        Ok(Self::new(connection, config.file_name.clone()))
    }

    fn inventory_path(&self) -> PathBuf {
        self.connection.file_path(&self.file_name)
    }

    /// Read all records from the inventory file
    fn read_records(&self, path: &Path) -> Result<Vec<CdRecord>, StorageError> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound { path: path.to_path_buf() });
            }
            Err(e) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        if metadata.len() == 0 {
            return Err(StorageError::Empty { path: path.to_path_buf() });
        }

        let file = File::open(path).map_err(|e| StorageError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let corrupt = |reason: String| StorageError::Corrupt {
            path: path.to_path_buf(),
            reason,
        };

        let headers = csv_reader
            .headers()
            .map_err(|e| corrupt(format!("unreadable header: {}", e)))?;
        if !headers.iter().eq(HEADER.iter().copied()) {
            return Err(corrupt(format!("unexpected header: {:?}", headers)));
        }

        let mut records = Vec::new();
        for (row, result) in csv_reader.deserialize::<CdRecord>().enumerate() {
            let record = result.map_err(|e| corrupt(format!("row {}: {}", row + 1, e)))?;
            records.push(record);
        }

        Ok(records)
    }

    /// Write all records to the inventory file through a temp file
    fn write_records(&self, path: &Path, records: &[CdRecord]) -> Result<(), StorageError> {
        let temp_path = path.with_extension("tmp");
        let write_error = |source: csv::Error| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Err(e) = Self::write_csv(&temp_path, records) {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(e));
        }

        // Atomic move from temp to final file
        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            write_error(csv::Error::from(e))
        })
    }

    fn write_csv(file_path: &Path, records: &[CdRecord]) -> Result<(), csv::Error> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(file_path)?;

        // Header is written by hand so an empty inventory still has one
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));
        csv_writer.write_record(HEADER)?;
        for record in records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

impl InventoryStorage for CsvRecordRepository {
    fn load(&self) -> Result<RecordStore, StorageError> {
        let path = self.inventory_path();
        debug!("Loading inventory from {}", path.display());

        match self.read_records(&path) {
            Ok(records) => {
                info!("📂 Loaded {} CDs from {}", records.len(), path.display());
                Ok(RecordStore::from_records(records))
            }
            Err(e) => {
                match &e {
                    StorageError::NotFound { .. } | StorageError::Empty { .. } => {
                        warn!("Inventory not loaded from {}: {}", path.display(), e)
                    }
                    StorageError::Corrupt { reason, .. } => {
                        error!("Inventory file {} is unreadable: {}", path.display(), reason)
                    }
                    _ => error!("Failed to read inventory {}: {:?}", path.display(), e),
                }
                Err(e)
            }
        }
    }

    fn save(&self, store: &RecordStore) -> Result<PathBuf, StorageError> {
        let path = self.inventory_path();

        match self.write_records(&path, &store.records) {
            Ok(()) => {
                info!("💾 Saved {} CDs to {}", store.len(), path.display());
                Ok(path)
            }
            Err(e) => {
                error!("Failed to save inventory to {}: {:?}", path.display(), e);
                Err(e)
            }
        }
    }

    fn location(&self) -> PathBuf {
        self.inventory_path()
    }
}
