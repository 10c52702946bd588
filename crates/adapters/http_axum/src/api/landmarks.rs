//! JSON handlers for landmarks.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use wanderlog_app::ports::{LandmarkRepository, VisitRepository};
use wanderlog_domain::id::LandmarkId;
use wanderlog_domain::landmark::Landmark;
use wanderlog_domain::record::Fields;

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Landmark>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Landmark>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Landmark>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
///
/// Deleting an id that does not exist still reports `Deleted`.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => MessageBody::json("Deleted").into_response(),
        }
    }
}

/// `GET /landmarks`
pub async fn list<LR, VR>(
    State(state): State<AppState<LR, VR>>,
) -> Result<ListResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    let landmarks = state.landmark_service.list_landmarks().await?;
    Ok(ListResponse::Ok(Json(landmarks)))
}

/// `GET /landmarks/{id}`
pub async fn get<LR, VR>(
    State(state): State<AppState<LR, VR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    let landmark = state
        .landmark_service
        .get_landmark(LandmarkId::from(id))
        .await?;
    Ok(GetResponse::Ok(Json(landmark)))
}

/// `POST /landmarks`
pub async fn create<LR, VR>(
    State(state): State<AppState<LR, VR>>,
    Json(body): Json<Fields>,
) -> Result<CreateResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    let created = state.landmark_service.create_landmark(body).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /landmarks/{id}`
pub async fn update<LR, VR>(
    State(state): State<AppState<LR, VR>>,
    Path(id): Path<String>,
    Json(body): Json<Fields>,
) -> Result<GetResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    let updated = state
        .landmark_service
        .update_landmark(LandmarkId::from(id), body)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /landmarks/{id}`
pub async fn delete<LR, VR>(
    State(state): State<AppState<LR, VR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    state
        .landmark_service
        .delete_landmark(LandmarkId::from(id))
        .await?;
    Ok(DeleteResponse::Deleted)
}
