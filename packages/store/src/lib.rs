pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use models::{NewNote, Note, NoteId, User};
pub use repo::{NoteRepository, StoreError, UniqueField, UserRepository};
