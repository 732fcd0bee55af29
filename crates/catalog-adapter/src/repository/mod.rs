//! Storage Adapters - Repository implementations
//!
//! These implement the repository trait from catalog-domain.

pub mod in_memory;
