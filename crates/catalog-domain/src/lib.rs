//! # Catalog Domain Layer
//!
//! Entities and the repository port, free of storage concerns.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 Domain Layer (This Crate)                  │
//! │  ┌────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entity trait & Product                   ││
//! │  │  repository/- Trait definitions (not implementations)  ││
//! │  └────────────────────────────────────────────────────────┘│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! If we switch from an in-memory list to a database, this crate doesn't change.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    entity::Entity,
    product::{Product, ProductId},
};

pub use repository::entity_repository::{Entities, Repository, RepositoryError};
