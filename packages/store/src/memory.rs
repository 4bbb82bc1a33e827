use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::models::{NewNote, Note, NoteId, User};
use crate::repo::{NoteRepository, StoreError, UniqueField, UserRepository};

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<String, User>,
    notes: BTreeMap<NoteId, Note>,
    last_note_id: NoteId,
}

/// In-memory store for tests and local runs without Postgres.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        self.state
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.state()?.users.get(username).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.state()?.users.values().any(|u| u.email == email))
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut state = self.state()?;
        if state.users.contains_key(&user.username) {
            return Err(StoreError::Duplicate(UniqueField::Username));
        }
        if state.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(UniqueField::Email));
        }
        state.users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<bool, StoreError> {
        let mut state = self.state()?;
        // Mirrors the foreign key on notes.owner.
        if state.notes.values().any(|n| n.owner == username) {
            return Err(StoreError::OwnerHasNotes(username.to_string()));
        }
        Ok(state.users.remove(username).is_some())
    }
}

#[async_trait]
impl NoteRepository for MemoryStore {
    async fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        Ok(self.state()?.notes.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        Ok(self
            .state()?
            .notes
            .values()
            .filter(|n| n.owner == owner)
            .cloned()
            .collect())
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let mut state = self.state()?;
        if !state.users.contains_key(&note.owner) {
            return Err(StoreError::Backend(
                format!("unknown note owner {}", note.owner).into(),
            ));
        }
        state.last_note_id += 1;
        let note = note.with_id(state.last_note_id);
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, note: &Note) -> Result<bool, StoreError> {
        let mut state = self.state()?;
        match state.notes.get_mut(&note.id) {
            Some(stored) => {
                stored.title = note.title.clone();
                stored.content = note.content.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        Ok(self.state()?.notes.remove(&id).is_some())
    }

    async fn delete_by_owner(&self, owner: &str) -> Result<u64, StoreError> {
        let mut state = self.state()?;
        let before = state.notes.len();
        state.notes.retain(|_, n| n.owner != owner);
        Ok((before - state.notes.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: &str) -> User {
        User {
            username: username.to_string(),
            password_hash: "hash".to_string(),
            email: email.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_user() {
        let store = MemoryStore::new();
        UserRepository::insert(&store, &user("alice", "alice@example.com"))
            .await
            .unwrap();

        let found = store.find("alice").await.unwrap().unwrap();
        assert_eq!(found.email, "alice@example.com");
        assert!(store.find("bob").await.unwrap().is_none());
        assert!(store.email_exists("alice@example.com").await.unwrap());
        assert!(!store.email_exists("bob@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email() {
        let store = MemoryStore::new();
        UserRepository::insert(&store, &user("alice", "alice@example.com"))
            .await
            .unwrap();

        let err = UserRepository::insert(&store, &user("alice", "other@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(UniqueField::Username)));

        let err = UserRepository::insert(&store, &user("bob", "alice@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(UniqueField::Email)));
    }

    #[tokio::test]
    async fn test_note_lifecycle() {
        let store = MemoryStore::new();
        UserRepository::insert(&store, &user("alice", "alice@example.com"))
            .await
            .unwrap();

        let note = NoteRepository::insert(&store, NewNote::new("T", "C", "alice"))
            .await
            .unwrap();
        assert_eq!(note.owner, "alice");

        let mut edited = note.clone();
        edited.title = "T2".to_string();
        assert!(store.update(&edited).await.unwrap());
        assert_eq!(store.get(note.id).await.unwrap().unwrap().title, "T2");

        assert!(NoteRepository::delete(&store, note.id).await.unwrap());
        assert!(store.get(note.id).await.unwrap().is_none());
        assert!(!NoteRepository::delete(&store, note.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_note_ids_are_not_reused() {
        let store = MemoryStore::new();
        UserRepository::insert(&store, &user("alice", "alice@example.com"))
            .await
            .unwrap();

        let first = NoteRepository::insert(&store, NewNote::new("a", "a", "alice"))
            .await
            .unwrap();
        NoteRepository::delete(&store, first.id).await.unwrap();
        let second = NoteRepository::insert(&store, NewNote::new("b", "b", "alice"))
            .await
            .unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_user_with_notes_cannot_be_deleted_first() {
        let store = MemoryStore::new();
        UserRepository::insert(&store, &user("alice", "alice@example.com"))
            .await
            .unwrap();
        UserRepository::insert(&store, &user("bob", "bob@example.com"))
            .await
            .unwrap();
        NoteRepository::insert(&store, NewNote::new("a", "1", "alice"))
            .await
            .unwrap();
        NoteRepository::insert(&store, NewNote::new("b", "2", "alice"))
            .await
            .unwrap();
        NoteRepository::insert(&store, NewNote::new("c", "3", "bob"))
            .await
            .unwrap();

        let err = UserRepository::delete(&store, "alice").await.unwrap_err();
        assert!(matches!(err, StoreError::OwnerHasNotes(_)));

        assert_eq!(store.delete_by_owner("alice").await.unwrap(), 2);
        assert!(UserRepository::delete(&store, "alice").await.unwrap());
        assert!(store.find_by_owner("alice").await.unwrap().is_empty());
        assert_eq!(store.find_by_owner("bob").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_note_requires_existing_owner() {
        let store = MemoryStore::new();
        let err = NoteRepository::insert(&store, NewNote::new("T", "C", "ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
