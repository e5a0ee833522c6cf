// CLI module for operations beyond serving HTTP
pub mod populate;

use clap::{Parser, Subcommand};

/// Inventory application CLI
#[derive(Parser)]
#[command(name = "inventory-app")]
#[command(about = "Inventory management web application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (the default when no subcommand is given)
    Serve,

    /// Connect to the database, run pending migrations, and exit
    Migrate,

    /// Seed the database with sample categories and items
    Populate,
}
