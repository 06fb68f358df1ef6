//! Line-oriented console for the inventory menu.
//!
//! [`Console`] wraps any `BufRead` + `Write` pair so the same code drives a
//! real terminal (locked stdin/stdout) and in-memory buffers in tests. Every
//! read blocks until a full line arrives; end of input is surfaced as
//! [`ConsoleError::InputClosed`] instead of spinning on empty reads.

use log::debug;
use shared::{MenuChoice, RecordId, RecordStore};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const MENU: &str = "\n\n[[ Menu ]]\n\n\
[l] load Inventory from file\n\
[a] Add CD\n\
[i] Display Current Inventory\n\
[d] delete CD from Inventory\n\
[s] Save Inventory to file\n\
[x] exit\n";

const MENU_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console input was closed")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Console bound to an input reader and an output writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output writer (used to inspect rendered text)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text
    pub fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Show `message` and block for one line of input, without its line ending
    pub fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        // Invalid UTF-8 is replaced, never an error
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(|c: char| c == '\r' || c == '\n')
            .to_string();
        debug!("Console input: {:?}", line);
        Ok(line)
    }

    pub fn print_menu(&mut self) -> Result<(), ConsoleError> {
        self.say(MENU)
    }

    /// Ask for a menu command until one of `l, a, i, d, s, x` is entered
    pub fn read_menu_choice(&mut self) -> Result<MenuChoice, ConsoleError> {
        loop {
            let input = self.prompt(MENU_PROMPT)?;
            if let Some(choice) = MenuChoice::from_input(&input) {
                self.say("")?;
                return Ok(choice);
            }
        }
    }

    /// Print the inventory table, or a notice when it is empty
    pub fn show_inventory(&mut self, store: &RecordStore) -> Result<(), ConsoleError> {
        if store.is_empty() {
            return self.say("No entries in inventory table to show.\n");
        }

        self.say("======= The Current Inventory: =======")?;
        self.say("ID\tCD Title (by: Artist)\n")?;
        for record in store {
            self.say(record)?;
        }
        self.say("======================================")
    }

    /// Show the generated ID and read the title and artist for a new CD.
    /// Both fields are trimmed; empty values are accepted.
    pub fn prompt_new_record(&mut self, id: RecordId) -> Result<(RecordId, String, String), ConsoleError> {
        self.say(format!("CD ID: {}", id))?;
        let title = self.prompt("What is the CD's title? ")?.trim().to_string();
        let artist = self.prompt("What is the Artist's name? ")?.trim().to_string();
        Ok((id, title, artist))
    }

    /// Ask a yes/no question; only an exact (case-insensitive) `accepted` answer counts as yes
    pub fn confirm(&mut self, message: &str, accepted: &str) -> Result<bool, ConsoleError> {
        let answer = self.prompt(message)?;
        Ok(answer.trim().eq_ignore_ascii_case(accepted))
    }

    /// Wait for the user to press ENTER
    pub fn pause(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.prompt(message).map(|_| ())
    }
}
