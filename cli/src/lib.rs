//! Interactive command-line inventory of CD records.
//!
//! The binary in `main.rs` wires a [`backend::CsvRecordRepository`] and a
//! stdin/stdout [`backend::io::Console`] into an [`app::InventoryApp`].

pub mod app;
pub mod backend;
