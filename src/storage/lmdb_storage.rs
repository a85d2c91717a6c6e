use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use lmdb::{Database, DatabaseFlags, Environment, Transaction, WriteFlags};
use log::{debug, info, warn};

use super::KeyValueStorage;
use crate::error::StorageError;

const MAP_SIZE: usize = 16 * 1024 * 1024;
const DB_NAME: &str = "checklists";

/// Durable on-device storage backed by an LMDB environment in `<name>.lmdb/`.
///
/// Cloning is cheap and every clone shares the same environment. LMDB calls block, so
/// they run on tokio's blocking pool.
#[derive(Clone)]
pub struct LmdbStorage {
    env: Arc<Environment>,
    db: Database,
    path: PathBuf,
}

impl LmdbStorage {
    pub fn init(name: impl AsRef<str>) -> Result<Self, StorageError> {
        let path = PathBuf::from(format!("{}.lmdb", name.as_ref()));
        std::fs::create_dir_all(&path)?;

        let env = Environment::new()
            .set_max_dbs(1)
            .set_map_size(MAP_SIZE)
            .open(&path)?;
        let db = env.create_db(Some(DB_NAME), DatabaseFlags::empty())?;

        info!("Opened LMDB storage at {}", path.display());

        Ok(Self {
            env: Arc::new(env),
            db,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(env: &Environment, db: Database, key: &str) -> Result<Option<String>, StorageError> {
        let txn = env.begin_ro_txn()?;
        let value = match txn.get(db, &key) {
            Ok(bytes) => Some(std::str::from_utf8(bytes)?.to_string()),
            Err(lmdb::Error::NotFound) => None,
            Err(e) => return Err(e.into()),
        };
        txn.abort();
        Ok(value)
    }

    fn write(env: &Environment, db: Database, key: &str, value: &str) -> Result<(), StorageError> {
        let mut txn = env.begin_rw_txn()?;
        txn.put(db, &key, &value, WriteFlags::empty())?;
        txn.commit()?;
        Ok(())
    }

    /// Flushes buffers to disk before the host drops the handle.
    pub fn close(&self) -> Result<(), StorageError> {
        self.env.sync(true)?;
        info!("LMDB storage at {} synced", self.path.display());
        Ok(())
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&Environment, Database) -> Result<T, StorageError> + Send + 'static,
    {
        let env = Arc::clone(&self.env);
        let db = self.db;
        tokio::task::spawn_blocking(move || op(env.as_ref(), db))
            .await
            .map_err(|e| {
                warn!("LMDB task did not complete: {e}");
                StorageError::Task(e.to_string())
            })?
    }
}

#[async_trait]
impl KeyValueStorage for LmdbStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let key = key.to_string();
        self.run_blocking(move |env, db| Self::read(env, db, &key)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        debug!("LMDB write: {} ({} bytes)", key, value.len());
        let key = key.to_string();
        let value = value.to_string();
        self.run_blocking(move |env, db| Self::write(env, db, &key, &value))
            .await
    }
}
