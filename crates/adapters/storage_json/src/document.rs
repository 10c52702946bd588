//! A single collection persisted as one JSON array document.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::StorageError;

/// What a [`JsonDocument::modify`] closure wants done with the collection.
pub enum Commit<R> {
    /// Persist the mutated collection, then return the value.
    Write(R),
    /// Leave the document untouched and return the value.
    Skip(R),
}

/// A JSON array of `T` stored at `path`.
///
/// Reads load the whole file. Mutations hold a per-document lock across
/// load, mutate and persist, and replace the file by renaming a fully
/// written temporary sibling over it.
pub struct JsonDocument<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty array if the document does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be probed or written.
    pub async fn ensure_exists(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "seeding empty document");
        self.persist(&[]).await
    }

    /// Load every record in document order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be read or is not a JSON
    /// array of records.
    pub async fn read(&self) -> Result<Vec<T>, StorageError> {
        let bytes = tokio::fs::read(&self.path).await.inspect_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "document read failed");
        })?;
        let records = serde_json::from_slice(&bytes).inspect_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "document is malformed");
        })?;
        Ok(records)
    }

    /// Load the collection, hand it to `mutate`, and persist it when
    /// `mutate` returns [`Commit::Write`].
    ///
    /// Concurrent calls on the same document run one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if loading or persisting fails. A failed
    /// persist leaves the previous document in place.
    pub async fn modify<R, F>(&self, mutate: F) -> Result<R, StorageError>
    where
        F: FnOnce(&mut Vec<T>) -> Commit<R> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read().await?;
        match mutate(&mut records) {
            Commit::Write(value) => {
                self.persist(&records).await?;
                Ok(value)
            }
            Commit::Skip(value) => Ok(value),
        }
    }

    async fn persist(&self, records: &[T]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let tmp = self.tmp_path();

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await.inspect_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "document replace failed");
        })?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}
