//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use wanderlog_app::ports::{LandmarkRepository, VisitRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the landmark and visit routes with a health check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<LR, VR>(state: AppState<LR, VR>) -> Router
where
    LR: LandmarkRepository + Send + Sync + 'static,
    VR: VisitRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tower::ServiceExt;
    use wanderlog_app::services::landmark_service::LandmarkService;
    use wanderlog_app::services::visit_service::VisitService;
    use wanderlog_domain::error::WanderlogError;
    use wanderlog_domain::id::{LandmarkId, VisitId};
    use wanderlog_domain::landmark::Landmark;
    use wanderlog_domain::record::Fields;
    use wanderlog_domain::visit::Visit;

    #[derive(Default)]
    struct MemLandmarkRepo(Mutex<Vec<Landmark>>);

    #[derive(Default)]
    struct MemVisitRepo(Mutex<Vec<Visit>>);

    struct BrokenLandmarkRepo;
    struct BrokenVisitRepo;

    impl LandmarkRepository for MemLandmarkRepo {
        async fn create(&self, landmark: Landmark) -> Result<Landmark, WanderlogError> {
            self.0.lock().unwrap().push(landmark.clone());
            Ok(landmark)
        }
        async fn get_by_id(&self, id: LandmarkId) -> Result<Option<Landmark>, WanderlogError> {
            Ok(self.0.lock().unwrap().iter().find(|l| l.id == id).cloned())
        }
        async fn get_all(&self) -> Result<Vec<Landmark>, WanderlogError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn update(
            &self,
            id: LandmarkId,
            patch: Fields,
        ) -> Result<Option<Landmark>, WanderlogError> {
            let mut store = self.0.lock().unwrap();
            Ok(store.iter_mut().find(|l| l.id == id).map(|l| {
                l.merge(patch);
                l.clone()
            }))
        }
        async fn delete(&self, id: LandmarkId) -> Result<usize, WanderlogError> {
            let mut store = self.0.lock().unwrap();
            let before = store.len();
            store.retain(|l| l.id != id);
            Ok(before - store.len())
        }
    }

    impl VisitRepository for MemVisitRepo {
        async fn create(&self, visit: Visit) -> Result<Visit, WanderlogError> {
            self.0.lock().unwrap().push(visit.clone());
            Ok(visit)
        }
        async fn get_by_id(&self, id: VisitId) -> Result<Option<Visit>, WanderlogError> {
            Ok(self.0.lock().unwrap().iter().find(|v| v.id == id).cloned())
        }
        async fn get_all(&self) -> Result<Vec<Visit>, WanderlogError> {
            Ok(self.0.lock().unwrap().clone())
        }
    }

    fn broken() -> WanderlogError {
        WanderlogError::Storage(Box::new(std::io::Error::other("disk on fire")))
    }

    impl LandmarkRepository for BrokenLandmarkRepo {
        async fn create(&self, _landmark: Landmark) -> Result<Landmark, WanderlogError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: LandmarkId) -> Result<Option<Landmark>, WanderlogError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Landmark>, WanderlogError> {
            Err(broken())
        }
        async fn update(
            &self,
            _id: LandmarkId,
            _patch: Fields,
        ) -> Result<Option<Landmark>, WanderlogError> {
            Err(broken())
        }
        async fn delete(&self, _id: LandmarkId) -> Result<usize, WanderlogError> {
            Err(broken())
        }
    }

    impl VisitRepository for BrokenVisitRepo {
        async fn create(&self, _visit: Visit) -> Result<Visit, WanderlogError> {
            Err(broken())
        }
        async fn get_by_id(&self, _id: VisitId) -> Result<Option<Visit>, WanderlogError> {
            Err(broken())
        }
        async fn get_all(&self) -> Result<Vec<Visit>, WanderlogError> {
            Err(broken())
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            LandmarkService::new(MemLandmarkRepo::default()),
            VisitService::new(MemVisitRepo::default(), MemLandmarkRepo::default()),
        ))
    }

    fn broken_app() -> Router {
        build(AppState::new(
            LandmarkService::new(BrokenLandmarkRepo),
            VisitService::new(BrokenVisitRepo, BrokenLandmarkRepo),
        ))
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, _) = send(&test_app(), empty_request("GET", "/health")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_create_landmark_with_generated_id() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/landmarks",
                &json!({"name": "Eiffel Tower", "country": "France"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(
            body,
            json!({"id": id, "name": "Eiffel Tower", "country": "France"})
        );

        let (status, fetched) = send(&app, empty_request("GET", &format!("/landmarks/{id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_landmark() {
        let (status, body) = send(&test_app(), empty_request("GET", "/landmarks/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Not found"}));
    }

    #[tokio::test]
    async fn should_merge_fields_on_put() {
        let app = test_app();
        let (_, created) = send(
            &app,
            json_request("POST", "/landmarks", &json!({"name": "a", "country": "b"})),
        )
        .await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            &app,
            json_request(
                "PUT",
                &format!("/landmarks/{id}"),
                &json!({"name": "c", "id": "other"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": id, "name": "c", "country": "b"}));
    }

    #[tokio::test]
    async fn should_return_not_found_on_put_to_unknown_landmark() {
        let (status, body) = send(
            &test_app(),
            json_request("PUT", "/landmarks/unknown", &json!({"name": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Not found"}));
    }

    #[tokio::test]
    async fn should_report_deleted_even_for_unknown_landmark() {
        let (status, body) =
            send(&test_app(), empty_request("DELETE", "/landmarks/unknown")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Deleted"}));
    }

    #[tokio::test]
    async fn should_delete_landmark() {
        let app = test_app();
        let (_, created) =
            send(&app, json_request("POST", "/landmarks", &json!({"name": "a"}))).await;
        let uri = format!("/landmarks/{}", created["id"].as_str().unwrap());

        let (status, _) = send(&app, empty_request("DELETE", &uri)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, empty_request("GET", &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_create_visit_when_required_fields_present() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/visited",
                &json!({
                    "landmark_id": "X",
                    "visited_date": "2024-01-01",
                    "visitor_name": "Alice"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["landmark_id"], "X");
        assert_eq!(body["visited_date"], "2024-01-01");
        assert_eq!(body["visitor_name"], "Alice");
        assert!(body["id"].is_string());

        let (_, list) = send(&app, empty_request("GET", "/visited")).await;
        assert_eq!(list, json!([body]));
    }

    #[tokio::test]
    async fn should_reject_visit_with_missing_fields() {
        let app = test_app();
        let (status, body) = send(
            &app,
            json_request("POST", "/visited", &json!({"visited_date": "2024-01-01"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Missing required data fields"}));

        let (_, list) = send(&app, empty_request("GET", "/visited")).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_visit() {
        let (status, body) = send(&test_app(), empty_request("GET", "/visited/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Not found"}));
    }

    #[tokio::test]
    async fn should_report_specific_message_when_visit_storage_fails() {
        let (status, body) = send(
            &broken_app(),
            json_request(
                "POST",
                "/visited",
                &json!({
                    "landmark_id": "X",
                    "visited_date": "2024-01-01",
                    "visitor_name": "Alice"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"message": "Error occurred while adding visited data"})
        );
    }

    #[tokio::test]
    async fn should_report_generic_message_when_landmark_storage_fails() {
        let (status, body) = send(&broken_app(), empty_request("GET", "/landmarks")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Internal server error"}));
    }

    #[tokio::test]
    async fn should_reject_non_object_body() {
        let (status, _) = send(&test_app(), json_request("POST", "/landmarks", &json!([1, 2]))).await;
        assert!(status.is_client_error());
    }
}
