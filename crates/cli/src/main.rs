//! Marketplace CLI - cart inspection and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Show the current cart
//! marketplace-cli show
//!
//! # Add a product to the cart
//! marketplace-cli add -i prod-42 -t "Sun Hat" --image-url https://cdn.example.com/hat.png -p 12.50
//!
//! # Change quantities
//! marketplace-cli increment prod-42
//! marketplace-cli decrement prod-42
//! ```
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_DIR` - Directory for file-backed cart storage
//! - `CART_NAMESPACE` - Key namespace for persisted cart data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

#[derive(Parser)]
#[command(name = "marketplace-cli")]
#[command(author, version, about = "Marketplace CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current cart contents
    Show,
    /// Add a product to the cart (or increment it if already present)
    Add {
        /// Product ID
        #[arg(short, long)]
        id: String,

        /// Product display name
        #[arg(short, long)]
        title: String,

        /// Product image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,
    },
    /// Increase the quantity of a cart line by one
    Increment {
        /// Product ID of the line
        id: String,
    },
    /// Decrease the quantity of a cart line by one (removes it at zero)
    Decrement {
        /// Product ID of the line
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show => commands::cart::show().await?,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => commands::cart::add(id, title, image_url, price).await?,
        Commands::Increment { id } => commands::cart::increment(&id).await?,
        Commands::Decrement { id } => commands::cart::decrement(&id).await?,
    }
    Ok(())
}
