//! Shared application state for axum handlers.

use std::sync::Arc;

use wanderlog_app::ports::{LandmarkRepository, VisitRepository};
use wanderlog_app::services::landmark_service::LandmarkService;
use wanderlog_app::services::visit_service::VisitService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<LR, VR> {
    /// Landmark CRUD service.
    pub landmark_service: Arc<LandmarkService<LR>>,
    /// Visit append/read service. Shares the landmark repository type for
    /// the optional referential check.
    pub visit_service: Arc<VisitService<VR, LR>>,
}

impl<LR, VR> Clone for AppState<LR, VR> {
    fn clone(&self) -> Self {
        Self {
            landmark_service: Arc::clone(&self.landmark_service),
            visit_service: Arc::clone(&self.visit_service),
        }
    }
}

impl<LR, VR> AppState<LR, VR>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(landmark_service: LandmarkService<LR>, visit_service: VisitService<VR, LR>) -> Self {
        Self {
            landmark_service: Arc::new(landmark_service),
            visit_service: Arc::new(visit_service),
        }
    }
}
