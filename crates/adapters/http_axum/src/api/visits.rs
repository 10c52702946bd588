//! JSON handlers for visit records (`/visited`).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use wanderlog_app::ports::{LandmarkRepository, VisitRepository};
use wanderlog_domain::id::VisitId;
use wanderlog_domain::record::Fields;
use wanderlog_domain::visit::Visit;

use crate::error::ApiError;
use crate::state::AppState;

/// Reported when a visit cannot be stored.
pub const ADD_VISIT_FAILED: &str = "Error occurred while adding visited data";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Visit>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Visit>),
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
    Created(Json<Visit>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /visited`
pub async fn list<LR, VR>(
    State(state): State<AppState<LR, VR>>,
) -> Result<ListResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    let visits = state.visit_service.list_visits().await?;
    Ok(ListResponse::Ok(Json(visits)))
}

/// `GET /visited/{id}`
pub async fn get<LR, VR>(
    State(state): State<AppState<LR, VR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    let visit = state.visit_service.get_visit(VisitId::from(id)).await?;
    Ok(GetResponse::Ok(Json(visit)))
}

/// `POST /visited`
pub async fn create<LR, VR>(
    State(state): State<AppState<LR, VR>>,
    Json(body): Json<Fields>,
) -> Result<CreateResponse, ApiError>
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    tracing::debug!(?body, "received visit");
    let created = state
        .visit_service
        .create_visit(body)
        .await
        .map_err(|err| ApiError::from(err).storage_message(ADD_VISIT_FAILED))?;
    Ok(CreateResponse::Created(Json(created)))
}
