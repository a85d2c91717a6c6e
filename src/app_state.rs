use std::future::Future;
use std::sync::{Arc, Mutex};

use log::info;
use tokio::runtime::{Builder, Runtime};

use crate::config::AppConfig;
use crate::error::StorageError;
use crate::schedule::{WeeklySchedule, Weekday};
use crate::storage::LmdbStorage;
use crate::store::ChecklistStore;

/// Everything one host-side handle owns: the on-device storage, the runtime its calls are
/// driven on and the configuration it was created with.
pub struct AppState {
    runtime: Runtime,
    calls: Mutex<()>,
    storage: Arc<LmdbStorage>,
    config: AppConfig,
    schedule: WeeklySchedule,
}

impl AppState {
    pub fn init(config: AppConfig) -> Result<Self, StorageError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let storage = LmdbStorage::init(&config.db_name)?;
        info!("App state ready for database '{}'", config.db_name);

        Ok(Self {
            runtime,
            calls: Mutex::new(()),
            storage: Arc::new(storage),
            config,
            schedule: WeeklySchedule::default(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn checklist(&self, day: Weekday) -> ChecklistStore<LmdbStorage> {
        ChecklistStore::for_day(Arc::clone(&self.storage), day).with_max_sets(self.config.max_sets)
    }

    /// Drives one call to completion. Calls on the same handle never overlap, even when the
    /// host makes them from several threads.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        let _guard = self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.runtime.block_on(future)
    }

    pub fn close(&self) -> Result<(), StorageError> {
        self.storage.close()
    }
}
