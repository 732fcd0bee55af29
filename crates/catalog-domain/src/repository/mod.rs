//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define HOW the domain wants to store entities,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait Repository<T>   │  InMemoryRepository<T>
//!   fn add()            │
//!   fn get_by_id()      │
//! ```

pub mod entity_repository;
