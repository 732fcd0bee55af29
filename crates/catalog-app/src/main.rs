//! # catalog - Repository pattern demo
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Loads: DemoConfig (defaults or --config file)            │
//! │    ├── Creates: InMemoryRepository<Product> (adapter)           │
//! │    ├── Creates: ProductCatalog (use case)                       │
//! │    └── Runs: add, list, get, remove, list                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   catalog                        - Stock run (Laptop, Smartphone)
//!   catalog --config demo.yaml     - Run with custom products and ids
//!   catalog --json                 - Print the run as JSON
//!   catalog --unique-ids           - Reject duplicate product ids

use anyhow::Context;
use catalog_app::{demo, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so stdout only carries the demo output)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.load_config().with_context(|| match &cli.config {
        Some(path) => format!("failed to load config from {}", path.display()),
        None => "failed to build default config".to_string(),
    })?;

    let mut catalog = demo::build_catalog(&config);
    let report = demo::run(&mut catalog, &config)?;

    println!("{}", cli.render(&report)?);

    Ok(())
}
