use std::{path::Path, sync::Arc};

use tokio::sync::Mutex;

use crate::backend::{BackendKind, StoreBackend, StoreError};

/// The plain persistent backend: a single key-value table in a sqlite
/// database on device.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<rusqlite::Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = rusqlite::Connection::open(path).map_err(sqlite_error)?;
        // WAL mode for better concurrency
        db.pragma_update(None, "journal_mode", "WAL")
            .map_err(sqlite_error)?;
        Self::initialize(db)
    }

    /// Opens a transient in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let db = rusqlite::Connection::open_in_memory().map_err(sqlite_error)?;
        Self::initialize(db)
    }

    fn initialize(db: rusqlite::Connection) -> Result<Self, StoreError> {
        db.execute_batch("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .map_err(sqlite_error)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(db)),
        })
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish()
    }
}

#[async_trait::async_trait]
impl StoreBackend for SqliteStore {
    async fn get(&self, key: String) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(sqlite_error)?;
        let mut rows = stmt.query([&key]).map_err(sqlite_error)?;

        match rows.next().map_err(sqlite_error)? {
            Some(row) => Ok(Some(row.get::<_, String>(0).map_err(sqlite_error)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: String, value: String) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )
        .map_err(sqlite_error)?;
        Ok(())
    }

    async fn remove(&self, key: String) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM kv WHERE key = ?1", [&key])
            .map_err(sqlite_error)?;
        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Plain
    }
}

fn sqlite_error(err: rusqlite::Error) -> StoreError {
    StoreError::Io(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = SqliteStore::open_in_memory().expect("open");
        store
            .set("user".into(), r#"{"name":"Ada"}"#.into())
            .await
            .expect("set");
        assert_eq!(
            store.get("user".into()).await.expect("get"),
            Some(r#"{"name":"Ada"}"#.into())
        );
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = SqliteStore::open_in_memory().expect("open");
        store.set("count".into(), "1".into()).await.expect("set");
        store.set("count".into(), "2".into()).await.expect("set");
        assert_eq!(
            store.get("count".into()).await.expect("get"),
            Some("2".into())
        );
    }

    #[tokio::test]
    async fn clones_share_the_same_database() {
        let store = SqliteStore::open_in_memory().expect("open");
        let other = store.clone();
        store.set("shared".into(), "yes".into()).await.expect("set");
        assert_eq!(
            other.get("shared".into()).await.expect("get"),
            Some("yes".into())
        );
    }

    #[tokio::test]
    async fn remove_absent_key_succeeds() {
        let store = SqliteStore::open_in_memory().expect("open");
        store.remove("never-written".into()).await.expect("remove");
        assert_eq!(store.get("never-written".into()).await.expect("get"), None);
    }
}
