//! # Domain models for users and their notes
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account. `username` is the primary key and the only value the authorization guard ever compares against. |
//! | [`Note`] | A persisted note. `owner` holds the username of the [`User`] that created it. |
//! | [`NewNote`] | A note that has not been stored yet; the store assigns the id. |
//!
//! With the `sqlx` feature enabled, [`User`] and [`Note`] derive `sqlx::FromRow`
//! so the Postgres adapter can load rows straight into them.

use serde::{Deserialize, Serialize};

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// Surrogate key of a stored note.
pub type NoteId = i32;

/// A registered user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct User {
    pub username: String,
    /// Argon2 PHC string, stored in the `password` column.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "password"))]
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// First and last name joined for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A note owned by exactly one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Username of the owning [`User`].
    pub owner: String,
}

/// Fields of a note about to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub owner: String,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            owner: owner.into(),
        }
    }

    /// Attach the id handed out by the store.
    pub fn with_id(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            owner: self.owner,
        }
    }
}
