use anyhow::Result;
use log::{error, info};
use shared::InventoryConfig;
use std::io;

use cd_inventory::app::InventoryApp;
use cd_inventory::backend::{initialize_storage, io::Console};

fn main() -> Result<()> {
    // Diagnostics go to stderr; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("Starting CD Inventory");

    let config = InventoryConfig::default();
    let storage = initialize_storage(&config)?;

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut app = InventoryApp::new(storage, console);

    if let Err(e) = app.run() {
        error!("CD Inventory stopped: {:?}", e);
        return Err(e);
    }

    info!("CD Inventory closed");
    Ok(())
}
