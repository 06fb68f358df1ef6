use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Numeric CD identifier. Generated IDs start at 1.
pub type RecordId = i64;

/// Default name of the inventory file inside the data directory
pub const DEFAULT_INVENTORY_FILE: &str = "CDInventory.csv";

/// A single CD entry in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdRecord {
    pub id: RecordId,
    /// Title of the CD (may be empty)
    pub title: String,
    /// Artist name (may be empty)
    pub artist: String,
}

impl CdRecord {
    pub fn new(id: RecordId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for CdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by: {})", self.id, self.title, self.artist)
    }
}

/// The in-memory inventory: records in insertion order.
///
/// IDs are unique only when they were produced by ID generation; records
/// loaded from a file are taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    pub records: Vec<CdRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<CdRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CdRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a CdRecord;
    type IntoIter = std::slice::Iter<'a, CdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Menu commands accepted by the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `l` - reload the inventory from file
    Load,
    /// `a` - add a CD
    Add,
    /// `i` - display the current inventory
    List,
    /// `d` - delete a CD by ID
    Delete,
    /// `s` - save the inventory to file
    Save,
    /// `x` - exit without saving
    Exit,
}

impl MenuChoice {
    /// Parse raw menu input. Case-insensitive, surrounding whitespace ignored.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::List),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Where the inventory file lives
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Directory holding the inventory file
    pub data_directory: PathBuf,
    /// File name of the inventory inside `data_directory`
    pub file_name: String,
}

impl InventoryConfig {
    /// Full path of the inventory file
    pub fn inventory_path(&self) -> PathBuf {
        self.data_directory.join(&self.file_name)
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("."),
            file_name: DEFAULT_INVENTORY_FILE.to_string(),
        }
    }
}
