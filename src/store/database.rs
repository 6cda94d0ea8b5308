use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use log::{debug, info};
use rusqlite::Connection;
use crate::bin_constants::IN_MEMORY_DATABASE_PATH;
use crate::config::app_config::AppConfig;
use crate::store::StoreError;

/// Shared handle to the single SQLite connection.
///
/// Cloning is cheap; every clone talks to the same connection. Statements
/// run on the blocking thread pool so callers only ever await them.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub async fn open(config: &AppConfig) -> Result<Database, StoreError> {
        let path = config.database_path.clone();
        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        info!("opening database at {}", path.display());
        let conn = tokio::task::spawn_blocking(move ||
            open_connection(&path, busy_timeout)
        ).await??;
        Ok(Database::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Database, StoreError> {
        let conn = open_connection(
            Path::new(IN_MEMORY_DATABASE_PATH),
            Duration::ZERO,
        )?;
        Ok(Database::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Database {
        Database {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub async fn call<F, R>(&self, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let conn = self.conn.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock()
                .map_err(|_| StoreError::Poisoned)?;
            f(&mut conn).map_err(StoreError::from)
        }).await?
    }
}

fn open_connection(
    path: &Path,
    busy_timeout: Duration,
) -> rusqlite::Result<Connection> {
    let conn = if path == Path::new(IN_MEMORY_DATABASE_PATH) {
        Connection::open_in_memory()?
    } else {
        Connection::open(path)?
    };
    conn.busy_timeout(busy_timeout)?;
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(include_str!("schema.sql"))?;
    debug!("database schema is in place");
    Ok(conn)
}
