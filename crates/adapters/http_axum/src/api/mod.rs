//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod landmarks;
#[allow(clippy::missing_errors_doc)]
pub mod visits;

use axum::Router;
use axum::routing::get;

use wanderlog_app::ports::{LandmarkRepository, VisitRepository};

use crate::state::AppState;

/// Build the landmark and visit routes.
pub fn routes<LR, VR>() -> Router<AppState<LR, VR>>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    Router::new()
        // Landmarks
        .route(
            "/landmarks",
            get(landmarks::list::<LR, VR>).post(landmarks::create::<LR, VR>),
        )
        .route(
            "/landmarks/{id}",
            get(landmarks::get::<LR, VR>)
                .put(landmarks::update::<LR, VR>)
                .delete(landmarks::delete::<LR, VR>),
        )
        // Visits
        .route(
            "/visited",
            get(visits::list::<LR, VR>).post(visits::create::<LR, VR>),
        )
        .route("/visited/{id}", get(visits::get::<LR, VR>))
}
