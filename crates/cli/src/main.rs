use std::io;

use anyhow::Context;
use clap::Parser;

use stockroom_cli::{Args, Menu};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let args = Args::parse();
    let config = args.config();

    let mut inventory = Inventory::open(&config).with_context(|| {
        format!("failed to open inventory at {}", config.data_file.display())
    })?;

    tracing::info!(
        data_file = %config.data_file.display(),
        products = inventory.products().len(),
        suppliers = inventory.suppliers().len(),
        "inventory opened"
    );

    Menu::new(&mut inventory, io::stdin().lock(), io::stdout().lock())
        .run()
        .context("inventory session aborted")?;

    Ok(())
}
