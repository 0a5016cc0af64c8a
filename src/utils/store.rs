use serde::de::DeserializeOwned;
use std::{collections::HashSet, fmt, path::Path, sync::Arc};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub trait Record {
    fn id(&self) -> &str;
}

/// The in-memory collection holding every record of one resource type.
///
/// Cloning a store hands out another handle to the same collection. Insertion
/// order is preserved, so listing twice without a write in between yields the
/// same sequence.
pub struct Store<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<T: Record> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Store<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(vec![])),
        }
    }

    /// Builds a store from existing records. Records whose id was already seen
    /// are dropped so that ids stay unique.
    pub fn with_records(records: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id().to_string());
                if !fresh {
                    tracing::warn!("Dropping record with duplicate id: {}", record.id());
                }
                fresh
            })
            .collect::<Vec<_>>();

        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().await
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

pub fn position<T: Record>(records: &[T], id: &str) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

#[derive(Debug)]
pub enum SeedError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read seed file: {}", err),
            Self::Parse(err) => write!(f, "failed to parse seed file: {}", err),
        }
    }
}

impl std::error::Error for SeedError {}

/// Reads a JSON array of records from `path`.
pub async fn load_seed<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let raw = tokio::fs::read(path).await.map_err(SeedError::Read)?;
    serde_json::from_slice(&raw).map_err(SeedError::Parse)
}
