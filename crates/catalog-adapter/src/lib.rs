//! # Catalog Adapter Layer
//!
//! Implementations of the domain's ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `repository/` - Storage implementations

pub mod repository;

pub use repository::in_memory::{DuplicatePolicy, InMemoryRepository};
