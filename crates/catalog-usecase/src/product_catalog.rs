//! ProductCatalog - Product management over an injected repository
//!
//! The catalog only knows the `Repository` port. The adapter is chosen by
//! whoever builds it (see the app crate's wiring).

use catalog_domain::model::product::{Product, ProductId};
use catalog_domain::repository::entity_repository::{Repository, RepositoryError};
use tracing::{debug, info};

/// Application service for products
pub struct ProductCatalog {
    repository: Box<dyn Repository<Product>>,
}

impl ProductCatalog {
    pub fn new(repository: Box<dyn Repository<Product>>) -> Self {
        Self { repository }
    }

    pub fn add_product(&mut self, product: Product) -> Result<(), RepositoryError> {
        let id = product.id();
        self.repository.add(product)?;
        info!(%id, "product added");
        Ok(())
    }

    /// All products in insertion order
    pub fn products(&self) -> Vec<Product> {
        self.repository.get_all().cloned().collect()
    }

    pub fn product(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.repository.get_by_id(id).cloned()
    }

    pub fn rename_product(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
    ) -> Result<(), RepositoryError> {
        let name = name.into();
        self.repository.get_by_id_mut(id)?.set_name(name.as_str());
        info!(%id, %name, "product renamed");
        Ok(())
    }

    /// Remove a product. Absent ids are ignored; returns whether anything
    /// was removed.
    pub fn remove_product(&mut self, id: ProductId) -> Result<bool, RepositoryError> {
        if !self.repository.contains(id) {
            debug!(%id, "remove skipped, product not stored");
            return Ok(false);
        }
        self.repository.remove(id)?;
        info!(%id, "product removed");
        Ok(true)
    }

    pub fn count(&self) -> usize {
        self.repository.len()
    }
}

impl core::fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductCatalog")
            .field("count", &self.count())
            .finish()
    }
}
