//! Product - The catalog entry
//!
//! Product is an Entity (has identity).
//! It carries no behavior beyond its identifier and an optional label.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Unique identifier for a Product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product - A plain catalog record
///
/// Two products are equal when both id and name match. Uniqueness of the
/// id inside a repository is the repository's concern, not the entity's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (Entity identity)
    id: ProductId,
    /// Display label, may be absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Product {
    /// Create a named Product
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Create a Product without a name
    pub fn unnamed(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    // ========== Mutation ==========

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn clear_name(&mut self) {
        self.name = None;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Product {} - {}", self.id, self.name().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Laptop");

        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.name(), Some("Laptop"));
        assert_eq!(Entity::id(&product).value(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Product::new(2, "Smartphone").to_string(), "Product 2 - Smartphone");
        assert_eq!(Product::unnamed(3).to_string(), "Product 3 - ");
    }

    #[test]
    fn test_equality_covers_name() {
        let laptop = Product::new(1, "Laptop");
        let renamed = Product::new(1, "Notebook");

        assert_ne!(laptop, renamed);
        assert_eq!(laptop, Product::new(1, "Laptop"));
    }

    #[test]
    fn test_rename() {
        let mut product = Product::unnamed(7);
        product.set_name("Tablet");
        assert_eq!(product.name(), Some("Tablet"));

        product.clear_name();
        assert_eq!(product.name(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Product::new(1, "Laptop")).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Laptop"}"#);

        let unnamed: Product = serde_json::from_str(r#"{"id":4}"#).unwrap();
        assert_eq!(unnamed, Product::unnamed(4));
    }
}
