//! # Catalog Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between callers and whichever
//! repository adapter was wired in.

pub use catalog_domain;

pub mod product_catalog;

pub use product_catalog::ProductCatalog;
