//! Boutique CLI - Storefront for the product catalog
//!
//! Browse, add, and remove catalog products from the terminal.

mod api;
mod config;
mod flow;
mod router;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use uuid::Uuid;

use api::{BoutiqueClient, CreateProductRequest};
use config::Config;
use flow::{DeleteConfirmationFlow, DeleteState};
use router::{CliRouter, Navigator, Page, ProgressIndicator, HOME_PATH};

#[derive(Parser)]
#[command(name = "boutique")]
#[command(about = "Boutique CLI - Furniture Boutique storefront", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides the configured one)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check and store the API base URL
    Connect {
        /// Base URL of the Boutique API
        url: String,
    },

    /// Product catalog operations
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List all products
    List,
    /// Show a single product
    Get {
        /// Product ID
        id: Uuid,
    },
    /// Create a product (prompts for anything not given)
    Create {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        media_url: Option<String>,
    },
    /// Delete a product after confirmation
    Delete {
        /// Product ID
        id: Uuid,
        /// Confirm without prompting
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Connect { url } => cmd_connect(url).await,
        Commands::Product { action } => cmd_product(action, cli.base_url).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_connect(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);

    let client = BoutiqueClient::new(&config.base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Boutique API at {}", config.base_url);
        }
    }

    config.save()?;
    println!("{} Base URL saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_product(action: ProductAction, base_url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let base_url = base_url.unwrap_or(config.base_url);
    let client = BoutiqueClient::new(&base_url);

    let mut router = CliRouter::new(&client);
    router.subscribe(Arc::new(ProgressIndicator));

    match action {
        ProductAction::List => router.push(HOME_PATH).await?,

        ProductAction::Get { id } => router.push(&Page::Product(id).path()).await?,

        ProductAction::Create {
            name,
            price,
            description,
            media_url,
        } => {
            let request = CreateProductRequest {
                name: prompt_missing(name, "Name")?,
                price: match price {
                    Some(p) => p,
                    None => Input::<f64>::new()
                        .with_prompt("Price")
                        .interact_text()
                        .context("Failed to read input")?,
                },
                description: prompt_missing(description, "Description")?,
                media_url: prompt_missing(media_url, "Media URL")?,
            };

            let product = client.create_product(&request).await?;
            println!(
                "{} Product {} created ({})",
                "✓".green(),
                product.name.cyan(),
                product.id.to_string().dimmed()
            );
        }

        ProductAction::Delete { id, yes } => {
            // Show the product page the delete is issued from
            router.push(&Page::Product(id).path()).await?;

            let mut flow = DeleteConfirmationFlow::new(id, &client, &router);
            flow.request_delete()?;

            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Are you sure you want to delete this product?")
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;

            if !confirmed {
                flow.cancel()?;
                println!("Cancelled.");
                return Ok(());
            }

            println!("\n{}", "Deleting...".dimmed());
            let result = flow.confirm().await;
            match flow.state() {
                DeleteState::Deleted => {
                    println!("{} Product {} deleted", "✓".green(), id.to_string().dimmed());
                }
                DeleteState::Failed(message) => {
                    println!("{} {}", "✗ Delete failed:".red(), message);
                }
                _ => {}
            }
            result?;
        }
    }

    Ok(())
}

fn prompt_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .context("Failed to read input"),
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);

    Ok(())
}
