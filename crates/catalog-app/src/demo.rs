//! Scripted demo run: add, list, get, remove, list

use catalog_adapter::InMemoryRepository;
use catalog_domain::{Product, ProductId};
use catalog_usecase::ProductCatalog;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::DemoConfig;

/// What the scripted run observed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    /// Contents after seeding
    pub initial: Vec<Product>,
    pub fetch_id: ProductId,
    /// `None` when `fetch_id` was not stored
    pub retrieved: Option<Product>,
    pub removed_id: ProductId,
    /// `false` when `removed_id` was not stored
    pub removed: bool,
    /// Contents after the removal
    pub remaining: Vec<Product>,
}

/// Wire an in-memory repository into a catalog
pub fn build_catalog(config: &DemoConfig) -> ProductCatalog {
    let repository = InMemoryRepository::<Product>::with_capacity(config.products.len())
        .with_duplicate_policy(config.duplicate_policy());
    ProductCatalog::new(Box::new(repository))
}

/// Run the script against `catalog`.
///
/// A missed fetch is reported in the result. A rejected duplicate while
/// seeding aborts the run.
pub fn run(catalog: &mut ProductCatalog, config: &DemoConfig) -> crate::Result<DemoReport> {
    for product in &config.products {
        catalog.add_product(product.clone())?;
    }
    let initial = catalog.products();
    info!(count = initial.len(), "catalog seeded");

    let retrieved = match catalog.product(config.fetch_id) {
        Ok(product) => Some(product),
        Err(err) => {
            warn!(%err, "fetch missed");
            None
        }
    };

    let removed = catalog.remove_product(config.remove_id)?;
    let remaining = catalog.products();
    info!(count = remaining.len(), "removal done");

    Ok(DemoReport {
        initial,
        fetch_id: config.fetch_id,
        retrieved,
        removed_id: config.remove_id,
        removed,
        remaining,
    })
}

impl DemoReport {
    /// Console rendering, one entry per line
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.initial.iter().map(ToString::to_string).collect();

        lines.push(String::new());
        match &self.retrieved {
            Some(product) => {
                lines.push(format!("Retrieved: {}", product.name().unwrap_or_default()))
            }
            None => lines.push(format!("Product {} not found", self.fetch_id)),
        }

        lines.push(String::new());
        lines.push("After removal:".to_string());
        lines.extend(self.remaining.iter().map(ToString::to_string));

        lines.push(String::new());
        lines.push("Done.".to_string());
        lines
    }
}
