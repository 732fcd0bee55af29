//! Entity - Anything with a stable identity
//!
//! Repositories are generic over this trait. The identifier is exposed
//! through a trait bound instead of being looked up at runtime.

use core::fmt::{Debug, Display};

/// A record with an identifier that a repository can key on.
pub trait Entity {
    /// Identifier type (cheap to copy, comparable, printable in errors)
    type Id: Copy + Eq + Debug + Display;

    /// The identifier of this entity
    fn id(&self) -> Self::Id;
}
