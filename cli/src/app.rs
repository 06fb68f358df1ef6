use anyhow::{Context, Result};
use log::{debug, info, warn};
use shared::{MenuChoice, RecordStore};
use std::io::{BufRead, Write};
use std::mem;

use crate::backend::domain::{add_entry, delete_entry, generate_id, parse_record_id};
use crate::backend::io::{Console, ConsoleError};
use crate::backend::storage::InventoryStorage;

/// Interactive session over a single in-memory inventory.
///
/// The app owns the only mutable [`RecordStore`]; every menu handler takes it
/// out, passes it through the domain functions and puts the result back.
pub struct InventoryApp<S, R, W> {
    storage: S,
    console: Console<R, W>,
    store: RecordStore,
}

impl<S, R, W> InventoryApp<S, R, W>
where
    S: InventoryStorage,
    R: BufRead,
    W: Write,
{
    pub fn new(storage: S, console: Console<R, W>) -> Self {
        Self {
            storage,
            console,
            store: RecordStore::new(),
        }
    }

    /// The current in-memory inventory
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Load the saved inventory, then serve menu commands until exit.
    ///
    /// Closing the input ends the session the same way `x` does. Nothing is
    /// saved implicitly.
    pub fn run(&mut self) -> Result<()> {
        info!("🚀 Starting inventory session ({})", self.storage.location().display());

        match self.run_session() {
            Ok(()) => {
                info!("Inventory session ended by user");
                Ok(())
            }
            Err(ConsoleError::InputClosed) => {
                info!("Console input closed, ending inventory session");
                Ok(())
            }
            Err(e) => Err(e).context("Inventory session failed"),
        }
    }

    fn run_session(&mut self) -> Result<(), ConsoleError> {
        self.reload()?;
        self.console.show_inventory(&self.store)?;

        loop {
            self.console.print_menu()?;
            let choice = self.console.read_menu_choice()?;
            debug!("Menu choice: {:?}", choice);

            match choice {
                MenuChoice::Exit => break,
                MenuChoice::Load => self.handle_load()?,
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::List => self.console.show_inventory(&self.store)?,
                MenuChoice::Delete => self.handle_delete()?,
                MenuChoice::Save => self.handle_save()?,
            }
        }

        if !self.store.is_empty() {
            debug!("Exiting with {} CDs in memory (not saved automatically)", self.store.len());
        }
        Ok(())
    }

    /// Replace the store with the saved inventory; on failure keep it as is
    fn reload(&mut self) -> Result<(), ConsoleError> {
        match self.storage.load() {
            Ok(store) => {
                self.store = store;
                Ok(())
            }
            Err(e) => {
                warn!("Keeping {} CDs in memory after failed load", self.store.len());
                self.console.say(format!("\n{}", e))
            }
        }
    }

    fn handle_load(&mut self) -> Result<(), ConsoleError> {
        self.console.say(
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
        )?;
        let confirmed = self.console.confirm(
            "type 'yes' to continue and reload from file, otherwise reload will be canceled.\n",
            "yes",
        )?;

        if confirmed {
            self.console.say("reloading...")?;
            self.reload()?;
        } else {
            self.console
                .pause("canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.")?;
        }
        self.console.show_inventory(&self.store)
    }

    fn handle_add(&mut self) -> Result<(), ConsoleError> {
        let id = generate_id(&self.store);
        let (id, title, artist) = self.console.prompt_new_record(id)?;

        self.store = add_entry(mem::take(&mut self.store), id, title, artist);
        self.console.show_inventory(&self.store)
    }

    fn handle_delete(&mut self) -> Result<(), ConsoleError> {
        self.console.show_inventory(&self.store)?;
        let raw_id = self.console.prompt("Which ID would you like to delete? ")?;

        match parse_record_id(&raw_id) {
            Ok(id) => {
                let (store, outcome) = delete_entry(mem::take(&mut self.store), id);
                self.store = store;
                self.console.say(format!("{}\n", outcome.message()))?;
            }
            Err(e) => self.console.say(e)?,
        }
        self.console.show_inventory(&self.store)
    }

    fn handle_save(&mut self) -> Result<(), ConsoleError> {
        self.console.show_inventory(&self.store)?;

        if self.console.confirm("Save this inventory to file? [y/n] ", "y")? {
            match self.storage.save(&self.store) {
                Ok(path) => self
                    .console
                    .say(format!("The inventory was saved to {}", path.display())),
                Err(e) => self.console.say(e),
            }
        } else {
            self.console
                .pause("The inventory was NOT saved to file. Press [ENTER] to return to the menu.")
        }
    }
}
