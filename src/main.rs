//! # Shelfrig CLI
//!
//! Command-line interface for the shelf label printer.
//!
//! ## Usage
//!
//! ```bash
//! # Run the clerk UI against a local catalog
//! shelfrig serve --catalog-file demos/catalog.json
//!
//! # Run against Square (token from SQUARE_ACCESS_TOKEN)
//! SQUARE_ENVIRONMENT=production shelfrig serve --port 8080
//!
//! # Search the catalog from the terminal
//! shelfrig search milk --catalog-file demos/catalog.json
//!
//! # Write a label sheet without the UI
//! shelfrig sheet --catalog-file demos/catalog.json \
//!     --item "Whole Milk" --item "Large Eggs" \
//!     --rename "Large Eggs=Farm Eggs" --out labels.html
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::sync::RwLock;

use shelfrig::{
    ShelfError,
    config::{GatewayArgs, LogFormat},
    layout::format_price,
    logging, render,
    server::{self, ServerConfig},
    session::{self, Command, LabelQueueSession},
};

/// Shelfrig - Shelf label queue and printer
#[derive(Parser, Debug)]
#[command(name = "shelfrig")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    /// Default log level (overridden by RUST_LOG)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server and clerk UI
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 3000)]
        port: u16,

        #[command(flatten)]
        gateway: GatewayArgs,
    },

    /// Search the catalog and list matching items
    Search {
        /// Text to search for (a barcode works too)
        query: String,

        #[command(flatten)]
        gateway: GatewayArgs,
    },

    /// Queue items by name and write the printable sheet
    Sheet {
        /// Item to queue (repeatable); the first search hit with this exact name is used
        #[arg(long = "item", value_name = "NAME", required = true)]
        items: Vec<String>,

        /// Display override as NAME=TEXT (repeatable)
        #[arg(long = "rename", value_name = "NAME=TEXT")]
        renames: Vec<String>,

        /// Output HTML file
        #[arg(long, default_value = "labels.html")]
        out: PathBuf,

        #[command(flatten)]
        gateway: GatewayArgs,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ShelfError> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_format, &cli.log_level)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            gateway,
        } => {
            let config = ServerConfig {
                listen_addr: format!("{}:{}", host, port),
                gateway: gateway.resolve()?,
            };
            server::serve(config).await
        }
        Commands::Search { query, gateway } => {
            let gateway = gateway.resolve()?.connect()?;
            let items = gateway.search(&query).await?;
            if items.is_empty() {
                println!("No items found for '{}'", query);
            }
            for item in items {
                println!("{} ({} labels)", item.name, item.label_count());
                for v in &item.variations {
                    println!("  {:<20} ${:>8}  {}", v.name, format_price(v.price_cents), v.barcode);
                }
            }
            Ok(())
        }
        Commands::Sheet {
            items,
            renames,
            out,
            gateway,
        } => {
            let gateway = gateway.resolve()?.connect()?;
            let state = RwLock::new(LabelQueueSession::new());

            for name in &items {
                let found = gateway.search(name).await?;
                let item = found
                    .iter()
                    .find(|i| &i.name == name)
                    .or_else(|| found.first())
                    .cloned()
                    .ok_or_else(|| ShelfError::NotFound(name.clone()))?;
                session::dispatch(&state, gateway.as_ref(), Command::Toggle(item)).await;
            }

            for rename in &renames {
                let (name, text) = rename.split_once('=').ok_or_else(|| {
                    ShelfError::Config(format!("--rename expects NAME=TEXT, got '{}'", rename))
                })?;
                let command = Command::SetOverride {
                    name: name.to_string(),
                    text: text.to_string(),
                };
                session::dispatch(&state, gateway.as_ref(), command).await;
            }

            let session = state.read().await;
            if let Some(message) = session.message() {
                eprintln!("Warning: {}", message);
            }
            let sheet = session.layout()?;
            let html = render::render_html(&sheet, chrono::Local::now(), true);
            std::fs::write(&out, html)?;
            println!(
                "Wrote {} of {} labels to {}",
                sheet.occupied(),
                sheet.slots().len(),
                out.display()
            );
            Ok(())
        }
    }
}
