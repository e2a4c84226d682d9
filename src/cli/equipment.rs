//! Equipment list and detail views

use chrono::Utc;
use clap::Parser;

use crate::{
    models::{CreateEquipment, Equipment, PLACEHOLDER_IMAGE},
    services::{maintenance, AlertBanner},
    AppState,
};

#[derive(Debug, Parser)]
pub enum EquipmentCommand {
    /// List all equipment cards
    List,

    /// Open the detail view for one card
    Show(Show),

    /// Add a new refrigeration equipment record
    Add(Add),

    /// Delete an equipment record
    Rm(Rm),
}

impl EquipmentCommand {
    pub async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        match self {
            Self::List => list(state).await,
            Self::Show(command) => command.run(state).await,
            Self::Add(command) => command.run(state).await,
            Self::Rm(command) => command.run(state).await,
        }
    }
}

async fn list(state: &mut AppState) -> anyhow::Result<()> {
    let catalog = &mut state.services.equipment;
    catalog.load().await;
    let today = Utc::now().date_naive();

    for card in catalog.cards() {
        let status = if card.is_active() { "active" } else { "inactive" };
        let overdue = if maintenance::is_maintenance_due(Some(card), today, true) {
            "  [maintenance overdue]"
        } else {
            ""
        };
        println!("{:>4}  {}  [{status}]{overdue}", card.id, card.title);
        println!("      model {}  serial {}", card.model, card.serial_number);
        println!(
            "      {}  {}  humidity {}",
            card.capacity, card.temperature, card.humidity
        );
        println!(
            "      maintenance {} -> {}  installed {}",
            card.last_maintenance, card.next_maintenance, card.installed_date
        );
    }
    Ok(())
}

#[derive(Debug, Parser)]
pub struct Show {
    /// Equipment id from the list view; falls back to the stored selection
    id: Option<i64>,

    /// Dismiss the overdue banner for this view instance
    #[arg(long)]
    dismiss_alerts: bool,
}

impl Show {
    async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        let services = &mut state.services;

        // The detail view always works from a fresh fetch
        services.equipment.load().await;

        let selection = match self.id {
            Some(id) => services.equipment.select(id)?,
            None => None,
        };

        let mut banner = AlertBanner::new();
        if self.dismiss_alerts {
            banner.dismiss();
        }
        let today = Utc::now().date_naive();

        {
            let details = match &selection {
                Some(selection) => services.equipment.resolve(selection),
                None => match services.equipment.stored_selection()? {
                    Some(title) => services.equipment.find_by_title(&title),
                    None => None,
                },
            };
            render_detail(details, &banner, today);
        }

        // The detail page lists the first products beneath the equipment
        services.products.load().await;
        if !services.products.items().is_empty() {
            println!();
            println!("Products:");
            for product in services.products.items() {
                println!(
                    "  {}  {} x{} ({})",
                    product.id, product.nombre, product.cantidad, product.estado
                );
            }
        }
        Ok(())
    }
}

fn render_detail(details: Option<&Equipment>, banner: &AlertBanner, today: chrono::NaiveDate) {
    let Some(equipment) = details else {
        // Lookup failure renders an explicit empty state, not an error
        println!("No equipment selected.");
        return;
    };

    println!("{} (id {})", equipment.title, equipment.id);
    println!("  status        {}", equipment.description);
    println!("  capacity      {}", equipment.capacity);
    println!("  temperature   {}", equipment.temperature);
    println!("  humidity      {}", equipment.humidity);
    println!("  model         {}", equipment.model);
    println!("  serial        {}", equipment.serial_number);
    println!("  installed     {}", equipment.installed_date);
    println!("  maintenance   {} -> {}", equipment.last_maintenance, equipment.next_maintenance);
    println!("  image         {}", equipment.image);

    if banner.is_due(Some(equipment), today) {
        if let Some(message) = maintenance::overdue_message(equipment, today) {
            println!();
            println!("!! {message}");
        }
    }
}

#[derive(Debug, Parser)]
pub struct Add {
    #[arg(long)]
    title: String,

    /// Status label, e.g. "Active"
    #[arg(long)]
    description: String,

    /// Fill level percentage (0-100)
    #[arg(long)]
    capacity: f64,

    /// Operating temperature in °C (-50 to 50)
    #[arg(long)]
    temperature: f64,

    #[arg(long)]
    humidity: String,

    /// ISO date of the last maintenance
    #[arg(long)]
    last_maintenance: String,

    /// ISO date of the next scheduled maintenance
    #[arg(long)]
    next_maintenance: String,

    #[arg(long)]
    model: String,

    #[arg(long)]
    serial_number: String,

    /// ISO installation date
    #[arg(long)]
    installed_date: String,

    /// Image reference; the placeholder is used when omitted
    #[arg(long)]
    image: Option<String>,
}

impl Add {
    async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        let form = CreateEquipment {
            title: self.title,
            description: self.description,
            capacity: self.capacity,
            temperature: self.temperature,
            humidity: self.humidity,
            last_maintenance: self.last_maintenance,
            next_maintenance: self.next_maintenance,
            model: self.model,
            serial_number: self.serial_number,
            installed_date: self.installed_date,
            image: self.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        };

        // Accepted at write time, the form only warns
        if form.maintenance_window_inverted() {
            eprintln!("warning: next maintenance predates last maintenance");
        }

        let created = state.services.equipment.add(&form).await?;
        println!("Added equipment {} (id {})", created.title, created.id);
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Rm {
    /// Equipment id to delete; irreversible
    id: i64,
}

impl Rm {
    async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        let catalog = &mut state.services.equipment;
        catalog.load().await;

        match catalog.remove(self.id).await {
            Ok(()) => {
                println!("Deleted equipment {}", self.id);
                Ok(())
            }
            Err(e) => {
                // Delete failures are the one read/write path surfaced loudly
                eprintln!("Failed to delete equipment: {e}");
                Err(e.into())
            }
        }
    }
}
