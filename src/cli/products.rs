//! Product inventory views

use clap::Parser;

use crate::{
    models::{CreateProduct, PhotoSelection},
    AppState,
};

#[derive(Debug, Parser)]
pub enum ProductCommand {
    /// List the first six products
    List,

    /// Inspect one product
    Show(Show),

    /// Add a product to the inventory
    Add(Add),

    /// Delete a product
    Rm(Rm),
}

impl ProductCommand {
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
    let catalog = &mut state.services.products;
    catalog.load().await;

    for product in catalog.items() {
        println!(
            "{}  {}  {} x{} ({})",
            product.id, product.nombre, product.marca, product.cantidad, product.estado
        );
    }
    Ok(())
}

#[derive(Debug, Parser)]
pub struct Show {
    /// Product id from the list view
    id: String,
}

impl Show {
    async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        let catalog = &mut state.services.products;
        catalog.load().await;

        match catalog.select(&self.id) {
            Some(product) => {
                println!("{} (id {})", product.nombre, product.id);
                println!("  estado    {}", product.estado);
                println!("  fecha     {}", product.fecha);
                println!("  marca     {}", product.marca);
                println!("  cantidad  {}", product.cantidad);
                println!("  rubro     {}", product.rubro);
                if !product.detalles.is_empty() {
                    println!("  detalles  {}", product.detalles);
                }
                for reference in product.photo.refs() {
                    println!("  photo     {reference}");
                }
            }
            None => {
                println!("No product with id {} in the current view.", self.id);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Add {
    #[arg(long)]
    nombre: String,

    /// Free-text status label, e.g. "Disponible"
    #[arg(long)]
    estado: String,

    /// Date string; not cross-checked against other fields
    #[arg(long)]
    fecha: String,

    #[arg(long)]
    marca: String,

    /// Units in stock (at least 1)
    #[arg(long)]
    cantidad: i64,

    /// Free-text category label
    #[arg(long)]
    rubro: String,

    #[arg(long, default_value = "")]
    detalles: String,

    /// Image reference; repeat to stage several
    #[arg(long = "photo")]
    photos: Vec<String>,

    /// Remove a staged photo by index before submitting; repeatable
    #[arg(long = "drop-photo")]
    drop_photos: Vec<usize>,
}

impl Add {
    async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        let mut staged = PhotoSelection::default();
        for reference in self.photos {
            staged.push(reference);
        }
        // Highest index first so earlier removals don't shift later ones
        let mut drops = self.drop_photos;
        drops.sort_unstable_by(|a, b| b.cmp(a));
        for index in drops {
            staged.remove(index);
        }

        let form = CreateProduct {
            nombre: self.nombre,
            estado: self.estado,
            fecha: self.fecha,
            marca: self.marca,
            cantidad: self.cantidad,
            rubro: self.rubro,
            detalles: self.detalles,
        };

        let created = state
            .services
            .products
            .add(form, staged.into_inner())
            .await?;
        println!("Added product {} (id {})", created.nombre, created.id);
        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Rm {
    /// Product id to delete; irreversible
    id: String,
}

impl Rm {
    async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        let catalog = &mut state.services.products;
        catalog.load().await;

        match catalog.remove(&self.id).await {
            Ok(()) => {
                println!("Deleted product {}", self.id);
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to delete product: {e}");
                Err(e.into())
            }
        }
    }
}
