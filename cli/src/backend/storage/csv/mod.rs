//! # CSV Storage Module
//!
//! File-based inventory storage using the CSV format.
//!
//! ## File Format
//!
//! One header row followed by one row per CD, in inventory order:
//! ```csv
//! id,title,artist
//! 1,OK Computer,Radiohead
//! 2,"Live, Vol. 1",Various
//! ```
//!
//! A header with no rows is a valid empty inventory. A zero-byte file is
//! reported as empty, and anything that does not match the layout above is
//! reported as unreadable rather than partially loaded.

pub mod connection;
pub mod record_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use record_repository::CsvRecordRepository;
