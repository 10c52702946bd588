//! Storage port: repository traits for persistence.
//!
//! Each repository owns one collection. Implementations must serialize
//! mutating calls per collection: a mutation observes every mutation that
//! completed before it, and none are lost.

use std::future::Future;
use std::sync::Arc;

use wanderlog_domain::error::WanderlogError;
use wanderlog_domain::id::{LandmarkId, VisitId};
use wanderlog_domain::landmark::Landmark;
use wanderlog_domain::record::Fields;
use wanderlog_domain::visit::Visit;

/// Repository for persisting and querying [`Landmark`]s.
pub trait LandmarkRepository {
    /// Append a new landmark to the collection.
    fn create(
        &self,
        landmark: Landmark,
    ) -> impl Future<Output = Result<Landmark, WanderlogError>> + Send;

    /// Get the first landmark whose id matches.
    fn get_by_id(
        &self,
        id: LandmarkId,
    ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send;

    /// Get all landmarks in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Landmark>, WanderlogError>> + Send;

    /// Shallow-merge `patch` onto the matching landmark and persist it.
    ///
    /// Returns `None`, without writing, when no landmark matches.
    fn update(
        &self,
        id: LandmarkId,
        patch: Fields,
    ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send;

    /// Remove every landmark whose id matches and persist the collection,
    /// whether or not anything matched. Returns the number removed.
    fn delete(&self, id: LandmarkId) -> impl Future<Output = Result<usize, WanderlogError>> + Send;
}

/// Repository for persisting and querying [`Visit`]s.
pub trait VisitRepository {
    /// Append a new visit to the collection.
    fn create(&self, visit: Visit) -> impl Future<Output = Result<Visit, WanderlogError>> + Send;

    /// Get the first visit whose id matches.
    fn get_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, WanderlogError>> + Send;

    /// Get all visits in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Visit>, WanderlogError>> + Send;
}

impl<T: LandmarkRepository + Send + Sync> LandmarkRepository for Arc<T> {
    fn create(
        &self,
        landmark: Landmark,
    ) -> impl Future<Output = Result<Landmark, WanderlogError>> + Send {
        (**self).create(landmark)
    }

    fn get_by_id(
        &self,
        id: LandmarkId,
    ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Landmark>, WanderlogError>> + Send {
        (**self).get_all()
    }

    fn update(
        &self,
        id: LandmarkId,
        patch: Fields,
    ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send {
        (**self).update(id, patch)
    }

    fn delete(&self, id: LandmarkId) -> impl Future<Output = Result<usize, WanderlogError>> + Send {
        (**self).delete(id)
    }
}

impl<T: VisitRepository + Send + Sync> VisitRepository for Arc<T> {
    fn create(&self, visit: Visit) -> impl Future<Output = Result<Visit, WanderlogError>> + Send {
        (**self).create(visit)
    }

    fn get_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, WanderlogError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Visit>, WanderlogError>> + Send {
        (**self).get_all()
    }
}
