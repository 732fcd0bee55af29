//! Entity Repository - Abstract CRUD access over any Entity
//!
//! This trait defines what operations callers need.
//! How they're implemented (memory, file, database) is not our concern here.

use thiserror::Error;

use crate::model::entity::Entity;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No entity with the requested id
    #[error("Entity not found: {id}")]
    NotFound { id: String },
    /// An entity with this id is already stored
    #[error("Duplicate entity id: {id}")]
    DuplicateId { id: String },
}

impl RepositoryError {
    pub fn not_found(id: impl core::fmt::Display) -> Self {
        RepositoryError::NotFound { id: id.to_string() }
    }

    pub fn duplicate_id(id: impl core::fmt::Display) -> Self {
        RepositoryError::DuplicateId { id: id.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Lazy, insertion-ordered view over the stored entities
pub type Entities<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Object safe, so callers can hold a `Box<dyn Repository<T>>` and never
/// see the storage behind it.
///
/// Note: No async and no locking here. Callers sharing a repository
/// across threads must bring their own mutual exclusion.
pub trait Repository<T: Entity> {
    /// Store an entity at the end of the sequence
    fn add(&mut self, item: T) -> Result<(), RepositoryError>;

    /// Find the earliest-added entity with this id
    fn get_by_id(&self, id: T::Id) -> Result<&T, RepositoryError>;

    /// Same lookup as `get_by_id`, with mutable access
    fn get_by_id_mut(&mut self, id: T::Id) -> Result<&mut T, RepositoryError>;

    /// Iterate over every stored entity in insertion order
    fn get_all(&self) -> Entities<'_, T>;

    /// Remove the earliest-added entity with this id.
    ///
    /// Removing an id that is not stored succeeds without changing anything.
    fn remove(&mut self, id: T::Id) -> Result<(), RepositoryError>;

    /// Check if an entity exists
    fn contains(&self, id: T::Id) -> bool {
        self.get_by_id(id).is_ok()
    }

    /// Count all entities
    fn len(&self) -> usize {
        self.get_all().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
