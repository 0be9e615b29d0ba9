// src/store/mod.rs

pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use crate::{
    error::AppError,
    models::{
        mock_test::MockRecord,
        record::{Record, Records},
        sectional_test::SectionalRecord,
    },
};

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

/// Key of the JSON array holding full mocks.
pub const MOCKS_KEY: &str = "cat-mock-tests";
/// Key of the JSON array holding sectional tests.
pub const SECTIONALS_KEY: &str = "cat-sectional-tests";

/// Durable string-to-string storage. Values are opaque to the store.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// The two record collections, kept as whole JSON arrays under fixed keys.
///
/// Every read loads from the backing store; every mutation rewrites the
/// affected collection. Mutations are serialized so read-modify-write
/// cycles never interleave.
#[derive(Clone)]
pub struct RecordStore {
    kv: Arc<dyn KvStore>,
    write_lock: Arc<Mutex<()>>,
}

impl RecordStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            kv,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Missing key means an empty collection.
    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        match self.kv.get(key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| {
                tracing::error!("Stored collection '{}' could not be decoded: {}", key, e);
                AppError::from(e)
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(key, &raw).await
    }

    pub async fn mocks(&self) -> Result<Vec<MockRecord>, AppError> {
        self.load(MOCKS_KEY).await
    }

    pub async fn sectionals(&self) -> Result<Vec<SectionalRecord>, AppError> {
        self.load(SECTIONALS_KEY).await
    }

    pub async fn snapshot(&self) -> Result<Records, AppError> {
        Ok(Records {
            mocks: self.mocks().await?,
            sectionals: self.sectionals().await?,
        })
    }

    pub async fn add_mock(&self, record: MockRecord) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut mocks = self.mocks().await?;
        mocks.push(record);
        self.save(MOCKS_KEY, &mocks).await
    }

    pub async fn add_sectional(&self, record: SectionalRecord) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut sectionals = self.sectionals().await?;
        sectionals.push(record);
        self.save(SECTIONALS_KEY, &sectionals).await
    }

    /// Removes the record with `id` from whichever collection holds it.
    /// Full mocks are searched first. Returns `None` if no record matched.
    pub async fn delete(&self, id: &str) -> Result<Option<Record>, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut mocks = self.mocks().await?;
        if let Some(pos) = mocks.iter().position(|m| m.id == id) {
            let removed = mocks.remove(pos);
            self.save(MOCKS_KEY, &mocks).await?;
            return Ok(Some(Record::Mock(removed)));
        }

        let mut sectionals = self.sectionals().await?;
        if let Some(pos) = sectionals.iter().position(|s| s.id == id) {
            let removed = sectionals.remove(pos);
            self.save(SECTIONALS_KEY, &sectionals).await?;
            return Ok(Some(Record::Sectional(removed)));
        }

        Ok(None)
    }
}
