//! # IO Module
//!
//! The interface layer between the user and the domain logic. For the
//! inventory this is a plain text console: the menu, the inventory table and
//! the prompts for new CDs, IDs and confirmations. It renders domain values
//! and hands raw input back; it never touches storage.

pub mod console;

pub use console::{Console, ConsoleError};
