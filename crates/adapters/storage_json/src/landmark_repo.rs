//! JSON file implementation of [`LandmarkRepository`].

use std::future::Future;
use std::sync::Arc;

use wanderlog_app::ports::LandmarkRepository;
use wanderlog_domain::error::WanderlogError;
use wanderlog_domain::id::LandmarkId;
use wanderlog_domain::landmark::Landmark;
use wanderlog_domain::record::Fields;

use crate::document::{Commit, JsonDocument};

/// Landmark repository backed by a [`JsonDocument`].
pub struct JsonLandmarkRepository {
    document: Arc<JsonDocument<Landmark>>,
}

impl JsonLandmarkRepository {
    /// Create a new repository over the given document.
    #[must_use]
    pub fn new(document: Arc<JsonDocument<Landmark>>) -> Self {
        Self { document }
    }
}

impl LandmarkRepository for JsonLandmarkRepository {
    fn create(
        &self,
        landmark: Landmark,
    ) -> impl Future<Output = Result<Landmark, WanderlogError>> + Send {
        async move {
            let created = self
                .document
                .modify(move |records| {
                    records.push(landmark.clone());
                    Commit::Write(landmark)
                })
                .await?;
            Ok(created)
        }
    }

    fn get_by_id(
        &self,
        id: LandmarkId,
    ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send {
        async move {
            let records = self.document.read().await?;
            Ok(records.into_iter().find(|l| l.id == id))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Landmark>, WanderlogError>> + Send {
        async move { Ok(self.document.read().await?) }
    }

    fn update(
        &self,
        id: LandmarkId,
        patch: Fields,
    ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send {
        async move {
            let updated = self
                .document
                .modify(move |records| match records.iter_mut().find(|l| l.id == id) {
                    Some(landmark) => {
                        landmark.merge(patch);
                        Commit::Write(Some(landmark.clone()))
                    }
                    None => Commit::Skip(None),
                })
                .await?;
            Ok(updated)
        }
    }

    fn delete(&self, id: LandmarkId) -> impl Future<Output = Result<usize, WanderlogError>> + Send {
        async move {
            let removed = self
                .document
                .modify(move |records| {
                    let before = records.len();
                    records.retain(|l| l.id != id);
                    Commit::Write(before - records.len())
                })
                .await?;
            Ok(removed)
        }
    }
}
