use async_trait::async_trait;
use sqlx::PgPool;
use store::{NewNote, Note, NoteId, NoteRepository, StoreError, UniqueField, User, UserRepository};

/// Postgres-backed repositories sharing one pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn backend(error: sqlx::Error) -> StoreError {
    StoreError::Backend(Box::new(error))
}

/// Map unique violations on `users` to the field they concern.
fn map_insert_error(error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &error {
        if db.is_unique_violation() {
            return match db.constraint() {
                Some(constraint) if constraint.contains("email") => {
                    StoreError::Duplicate(UniqueField::Email)
                }
                _ => StoreError::Duplicate(UniqueField::Username),
            };
        }
    }
    backend(error)
}

/// The `notes.owner` foreign key rejects deleting a user who still has notes.
fn map_delete_error(username: &str, error: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &error {
        if db.is_foreign_key_violation() {
            return StoreError::OwnerHasNotes(username.to_string());
        }
    }
    backend(error)
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find(&self, username: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            "SELECT username, password, email, first_name, last_name FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        Ok(row.is_some())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (username, password, email, first_name, last_name) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|error| map_delete_error(username, error))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl NoteRepository for PgStore {
    async fn get(&self, id: NoteId) -> Result<Option<Note>, StoreError> {
        sqlx::query_as::<_, Note>("SELECT id, title, content, owner FROM notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Note>, StoreError> {
        sqlx::query_as::<_, Note>(
            "SELECT id, title, content, owner FROM notes WHERE owner = $1 ORDER BY id",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(backend)
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, content, owner) VALUES ($1, $2, $3) RETURNING id, title, content, owner",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)
    }

    async fn update(&self, note: &Note) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE notes SET title = $1, content = $2 WHERE id = $3")
            .bind(&note.title)
            .bind(&note.content)
            .bind(note.id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: NoteId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_owner(&self, owner: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE owner = $1")
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(result.rows_affected())
    }
}
