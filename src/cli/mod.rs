//! Command-line surface
//!
//! Each subcommand corresponds to one view of the application: the
//! equipment list, the equipment detail page and the product inventory.

mod equipment;
mod products;

use clap::Parser;

use crate::AppState;

#[derive(Debug, Parser)]
#[command(name = "coldtrack", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Refrigeration equipment views
    #[command(subcommand)]
    Equipment(equipment::EquipmentCommand),

    /// Product inventory views
    #[command(subcommand)]
    Product(products::ProductCommand),
}

impl Cli {
    pub async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        match self.command {
            Command::Equipment(command) => command.run(state).await,
            Command::Product(command) => command.run(state).await,
        }
    }
}
