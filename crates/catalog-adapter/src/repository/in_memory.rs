//! In-Memory Repository Implementation
//!
//! A `Vec`-backed implementation of the repository trait.
//! Lookups are linear scans in insertion order.

use catalog_domain::model::entity::Entity;
use catalog_domain::repository::entity_repository::{Entities, Repository, RepositoryError};
use tracing::debug;

/// What `add` does when the id is already stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Store the duplicate; lookups keep returning the earliest one
    #[default]
    Allow,
    /// Fail with `RepositoryError::DuplicateId`
    Reject,
}

/// In-memory Repository
///
/// Not synchronized. Wrap it in a lock if it has to be shared.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
    duplicates: DuplicatePolicy,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            duplicates: DuplicatePolicy::default(),
        }
    }

    /// Builder: set the duplicate-id policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&mut self, item: T) -> Result<(), RepositoryError> {
        let id = item.id();
        if self.duplicates == DuplicatePolicy::Reject && self.position(id).is_some() {
            return Err(RepositoryError::duplicate_id(id));
        }
        self.items.push(item);
        debug!(%id, size = self.items.len(), "entity added");
        Ok(())
    }

    fn get_by_id(&self, id: T::Id) -> Result<&T, RepositoryError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    fn get_by_id_mut(&mut self, id: T::Id) -> Result<&mut T, RepositoryError> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    fn get_all(&self) -> Entities<'_, T> {
        Box::new(self.items.iter())
    }

    fn remove(&mut self, id: T::Id) -> Result<(), RepositoryError> {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                debug!(%id, size = self.items.len(), "entity removed");
            }
            None => debug!(%id, "remove skipped, entity not stored"),
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
