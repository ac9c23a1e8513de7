//! CLI administration tool for pet-adoption.
//!
//! Lists customers, runs catalog searches and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all customers
//! cargo run --bin admin -- customers list
//!
//! # Search the catalog (add --seniors to keep only senior animals)
//! cargo run --bin admin -- search --species cat --size small --house-trained --seniors
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: see [`pet_adoption::config`].

use pet_adoption::config::{self, Config};
use pet_adoption::domain::entities::{AnimalRecord, SearchCriteria, Size, Species};
use pet_adoption::domain::repositories::{AdoptionRepository, AnimalCatalog};
use pet_adoption::domain::selection::{filter_seniors, iterate_lazily};
use pet_adoption::infrastructure::persistence::PgAdoptionRepository;
use pet_adoption::infrastructure::petfinder::PetfinderClient;
use pet_adoption::server::connect_pool;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing pet-adoption.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Customer records
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Search the animal catalog
    Search(SearchArgs),

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List all customers
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[derive(Args)]
struct SearchArgs {
    /// cat or dog
    #[arg(long)]
    species: Species,

    /// small, medium or large
    #[arg(long)]
    size: Size,

    #[arg(long)]
    good_with_children: bool,

    #[arg(long)]
    good_with_dogs: bool,

    #[arg(long)]
    good_with_cats: bool,

    #[arg(long)]
    house_trained: bool,

    #[arg(long)]
    special_needs: bool,

    /// Keep only animals classified as Senior
    #[arg(long)]
    seniors: bool,
}

impl From<&SearchArgs> for SearchCriteria {
    fn from(a: &SearchArgs) -> Self {
        SearchCriteria {
            species: a.species,
            size: a.size,
            good_with_children: a.good_with_children,
            good_with_dogs: a.good_with_dogs,
            good_with_cats: a.good_with_cats,
            house_trained: a.house_trained,
            special_needs: a.special_needs,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Customers {
            action: CustomerAction::List,
        } => list_customers(&config).await?,
        Commands::Search(args) => search(&config, &args).await?,
        Commands::Db {
            action: DbAction::Check,
        } => check_db(&config).await?,
    }

    Ok(())
}

async fn list_customers(config: &Config) -> Result<()> {
    let pool = connect_pool(config).await?;
    let repo = PgAdoptionRepository::new(Arc::new(pool));

    let customers = repo.list_customers().await?;

    if customers.is_empty() {
        println!("{}", "No customers yet".yellow());
        return Ok(());
    }

    println!("{}", "Customers".bright_blue().bold());
    println!();

    for c in &customers {
        println!(
            "{} {} {}",
            "•".green(),
            format!("{} {}", c.firstname, c.lastname).bold(),
            format!("<{}>", c.email).dimmed()
        );
        println!("    id:    {}", c.id);
        if let Some(phone) = &c.phone {
            println!("    phone: {}", phone);
        }
        let location: Vec<&str> = [&c.address, &c.city, &c.state, &c.zipcode]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect();
        if !location.is_empty() {
            println!("    addr:  {}", location.join(", "));
        }
    }

    println!();
    println!("Total: {}", customers.len().to_string().bold());

    Ok(())
}

async fn search(config: &Config, args: &SearchArgs) -> Result<()> {
    let client = PetfinderClient::new(config.catalog.clone());
    let criteria = SearchCriteria::from(args);

    println!(
        "{} {} / {}",
        "🔍 Searching".bright_blue().bold(),
        criteria.species,
        criteria.size
    );

    let mut animals = client.search(&criteria).await?;
    let total = animals.len();

    if args.seniors {
        animals = filter_seniors(animals);
    }

    for animal in iterate_lazily(&animals) {
        print_animal(animal);
    }

    println!();
    if args.seniors {
        println!(
            "{} seniors out of {} matches",
            animals.len().to_string().bold(),
            total
        );
    } else {
        println!("{} matches", total.to_string().bold());
    }

    Ok(())
}

fn print_animal(animal: &AnimalRecord) {
    let id = animal
        .id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let age = animal.age().unwrap_or("unknown age");
    let age = if animal.is_senior() {
        age.yellow().bold()
    } else {
        age.normal()
    };

    println!(
        "{} {:>10}  {}  ({})",
        "•".green(),
        id.dimmed(),
        animal.name().unwrap_or("(unnamed)").bold(),
        age
    );
}

async fn check_db(config: &Config) -> Result<()> {
    print!("Checking database connection... ");

    let pool = connect_pool(config).await?;
    let repo = PgAdoptionRepository::new(Arc::new(pool));

    match repo.ping().await {
        Ok(()) => {
            println!("{}", "✓ OK".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗ FAILED".red().bold());
            Err(e.into())
        }
    }
}
