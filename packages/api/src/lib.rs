//! # API crate: request handling for the notes service
//!
//! Everything between the HTTP socket and the storage traits lives here. The
//! binary in `packages/web` only wires configuration, the Postgres pool and the
//! session layer around [`routes::router`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Password hashing, the ownership guard and the per-request [`SessionContext`] |
//! | [`db`] | PostgreSQL pool, migrations and the [`PgStore`] repository implementation |
//! | [`error`] | [`AppError`] and its mapping to redirects, 404 and 500 pages |
//! | [`forms`] | Form bodies and their validation rules |
//! | [`routes`] | The axum router and its handlers |
//! | [`state`] | [`AppState`] shared by every handler |

pub mod auth;
pub mod db;
pub mod error;
pub mod forms;
pub mod routes;
pub mod state;

pub use auth::SessionContext;
pub use db::PgStore;
pub use error::{AppError, AppResult};
pub use state::AppState;
