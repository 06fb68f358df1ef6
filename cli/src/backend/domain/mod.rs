//! # Domain Module
//!
//! Business rules of the CD inventory: appending records, deleting by ID,
//! picking the next free ID and validating a typed ID. The functions work on
//! [`shared::RecordStore`] values and know nothing about files or the
//! console.
//!
//! ## Rules
//!
//! - New records are always appended; display order is insertion order
//! - Generated IDs are the smallest positive integer not in use
//! - Delete removes only the first record with a matching ID
//! - Duplicate IDs coming from a loaded file are tolerated, not repaired

pub mod record_operations;

pub use record_operations::*;
