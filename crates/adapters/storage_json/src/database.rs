//! Data directory setup: one [`JsonDocument`] per collection.

use std::path::PathBuf;
use std::sync::Arc;

use wanderlog_domain::landmark::Landmark;
use wanderlog_domain::visit::Visit;

use crate::document::JsonDocument;
use crate::error::StorageError;

/// File name of the landmark collection inside the data directory.
pub const LANDMARKS_FILE: &str = "landmarks.json";
/// File name of the visit collection inside the data directory.
pub const VISITS_FILE: &str = "visited.json";

/// Configuration for the JSON storage adapter.
pub struct Config {
    /// Directory holding the collection documents.
    pub data_dir: PathBuf,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the data directory if missing and seeds each missing
    /// collection document with an empty array.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory or a document cannot be
    /// created.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(self.data_dir).await
    }
}

/// Holds the collection documents and hands them to repositories.
pub struct Database {
    landmarks: Arc<JsonDocument<Landmark>>,
    visits: Arc<JsonDocument<Visit>>,
}

impl Database {
    async fn initialize(data_dir: PathBuf) -> Result<Self, StorageError> {
        tokio::fs::create_dir_all(&data_dir).await?;

        let landmarks = JsonDocument::new(data_dir.join(LANDMARKS_FILE));
        let visits = JsonDocument::new(data_dir.join(VISITS_FILE));
        landmarks.ensure_exists().await?;
        visits.ensure_exists().await?;

        tracing::debug!(data_dir = %data_dir.display(), "json storage ready");
        Ok(Self {
            landmarks: Arc::new(landmarks),
            visits: Arc::new(visits),
        })
    }

    /// Borrow the landmark collection document.
    #[must_use]
    pub fn landmarks(&self) -> &Arc<JsonDocument<Landmark>> {
        &self.landmarks
    }

    /// Borrow the visit collection document.
    #[must_use]
    pub fn visits(&self) -> &Arc<JsonDocument<Visit>> {
        &self.visits
    }
}
