//! Domain Models - The vocabulary of the catalog
//!
//! Every name here should match how we talk about the system.

pub mod entity;
pub mod product;
