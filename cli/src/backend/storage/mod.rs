//! # Storage Module
//!
//! Handles persistence of the CD inventory.
//!
//! The control loop only sees the [`InventoryStorage`] trait; the CSV
//! implementation in [`csv`] is what the binary uses. Loading and saving
//! always move the whole store, and every failure comes back as a
//! [`StorageError`] with its own user-facing message.

pub mod csv;
pub mod error;
pub mod traits;

pub use self::csv::{CsvConnection, CsvRecordRepository};
pub use error::StorageError;
pub use traits::InventoryStorage;
