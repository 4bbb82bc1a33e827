//! # Database module — PostgreSQL pool and repository adapter
//!
//! - [`connect`] opens the shared [`sqlx::PgPool`] and [`migrate`] applies the
//!   embedded migrations from `packages/api/migrations`.
//! - [`PgStore`] implements [`store::UserRepository`] and [`store::NoteRepository`]
//!   on top of that pool.

mod pg_store;
mod pool;

pub use pg_store::PgStore;
pub use pool::{connect, migrate};
