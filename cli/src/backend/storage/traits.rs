//! # Storage Traits
//!
//! Storage abstraction used by the control loop, so the inventory can be
//! persisted by any backend (the CSV file in production, a temp directory in
//! tests) without the loop knowing the details.

use shared::RecordStore;
use std::path::PathBuf;

use super::error::StorageError;

/// Whole-store persistence for the CD inventory.
///
/// Every call reads or writes the complete store; there are no partial
/// updates.
pub trait InventoryStorage {
    /// Load the complete inventory
    fn load(&self) -> Result<RecordStore, StorageError>;

    /// Overwrite the persisted inventory with `store`.
    /// Returns the path that was written.
    fn save(&self, store: &RecordStore) -> Result<PathBuf, StorageError>;

    /// Location of the persisted inventory, for messages and logs
    fn location(&self) -> PathBuf;
}
