//! # Repository traits — the persistence seam
//!
//! Handlers never talk to a database directly. They go through [`UserRepository`]
//! and [`NoteRepository`], which are implemented by the in-memory
//! [`MemoryStore`](crate::MemoryStore) and by the Postgres adapter in the `api`
//! crate.
//!
//! There is no cascading between the two traits. Removing an account means
//! calling [`NoteRepository::delete_by_owner`] first and
//! [`UserRepository::delete`] afterwards; the store refuses to drop a user who
//! still owns notes.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewNote, Note, NoteId, User};

/// Column protected by a uniqueness constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

/// Errors surfaced by every repository implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a user with this {0:?} already exists")]
    Duplicate(UniqueField),
    #[error("user {0} still owns notes")]
    OwnerHasNotes(String),
    #[error("storage backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Access to stored users, keyed by username.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Fails with [`StoreError::Duplicate`] when the username or email is taken.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// Returns whether a row was removed.
    async fn delete(&self, username: &str) -> Result<bool, StoreError>;
}

/// Access to stored notes.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError>;

    /// Notes of one owner, oldest first.
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Note>, StoreError>;

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError>;

    /// Overwrite title and content of an existing note. Returns whether it existed.
    async fn update(&self, note: &Note) -> Result<bool, StoreError>;

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError>;

    /// Remove every note of `owner`, returning how many went away.
    async fn delete_by_owner(&self, owner: &str) -> Result<u64, StoreError>;
}
