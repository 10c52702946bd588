//! Visit service: use-cases for logging visits against landmarks.

use wanderlog_domain::error::{NotFoundError, ValidationError, WanderlogError};
use wanderlog_domain::id::{LandmarkId, VisitId};
use wanderlog_domain::record::Fields;
use wanderlog_domain::visit::Visit;

use crate::ports::{LandmarkRepository, VisitRepository};

/// Application service for visit records.
///
/// Holds a landmark repository for the optional referential check on
/// create; it is only consulted when [`VisitService::verify_landmark`] is on.
pub struct VisitService<V, L> {
    repo: V,
    landmarks: L,
    verify_landmark: bool,
}

impl<V: VisitRepository, L: LandmarkRepository> VisitService<V, L> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: V, landmarks: L) -> Self {
        Self {
            repo,
            landmarks,
            verify_landmark: false,
        }
    }

    /// Require `landmark_id` to name an existing landmark on create.
    #[must_use]
    pub fn verify_landmark(mut self, enabled: bool) -> Self {
        self.verify_landmark = enabled;
        self
    }

    /// Validate and append a visit. Nothing is read or written when a
    /// required field is missing.
    ///
    /// # Errors
    ///
    /// Returns [`WanderlogError::Validation`] if a required field is absent
    /// or falsy, or if landmark verification is on and the landmark does
    /// not exist. Returns a storage error propagated from the repositories.
    pub async fn create_visit(&self, fields: Fields) -> Result<Visit, WanderlogError> {
        let visit = Visit::builder().fields(fields).build()?;

        if self.verify_landmark {
            self.ensure_landmark_exists(&visit).await?;
        }

        let created = self.repo.create(visit).await?;
        tracing::info!(id = %created.id, "visit created");
        Ok(created)
    }

    /// Look up a visit by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`WanderlogError::NotFound`] when no visit with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_visit(&self, id: VisitId) -> Result<Visit, WanderlogError> {
        let found = self.repo.get_by_id(id.clone()).await?;
        found.ok_or_else(|| {
            NotFoundError {
                entity: "Visit",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all visits in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_visits(&self) -> Result<Vec<Visit>, WanderlogError> {
        self.repo.get_all().await
    }

    async fn ensure_landmark_exists(&self, visit: &Visit) -> Result<(), WanderlogError> {
        let reference = visit
            .fields
            .get("landmark_id")
            .map(|value| match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            })
            .unwrap_or_default();

        match self
            .landmarks
            .get_by_id(LandmarkId::from(reference.as_str()))
            .await?
        {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownLandmark(reference).into()),
        }
    }
}
