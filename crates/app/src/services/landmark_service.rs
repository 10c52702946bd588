//! Landmark service: use-cases for managing landmarks.

use wanderlog_domain::error::{NotFoundError, WanderlogError};
use wanderlog_domain::id::LandmarkId;
use wanderlog_domain::landmark::Landmark;
use wanderlog_domain::record::Fields;

use crate::ports::LandmarkRepository;

/// Application service for landmark CRUD operations.
pub struct LandmarkService<R> {
    repo: R,
}

impl<R: LandmarkRepository> LandmarkService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a landmark from client fields. The id is always generated
    /// here, never taken from `fields`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_landmark(&self, fields: Fields) -> Result<Landmark, WanderlogError> {
        let landmark = Landmark::builder().fields(fields).build();
        let created = self.repo.create(landmark).await?;
        tracing::info!(id = %created.id, "landmark created");
        Ok(created)
    }

    /// Look up a landmark by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`WanderlogError::NotFound`] when no landmark with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_landmark(&self, id: LandmarkId) -> Result<Landmark, WanderlogError> {
        let found = self.repo.get_by_id(id.clone()).await?;
        found.ok_or_else(|| not_found(id))
    }

    /// List all landmarks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_landmarks(&self) -> Result<Vec<Landmark>, WanderlogError> {
        self.repo.get_all().await
    }

    /// Shallow-merge `patch` onto an existing landmark.
    ///
    /// # Errors
    ///
    /// Returns [`WanderlogError::NotFound`] if the landmark does not exist,
    /// or a storage error from the repository.
    pub async fn update_landmark(
        &self,
        id: LandmarkId,
        patch: Fields,
    ) -> Result<Landmark, WanderlogError> {
        let updated = self.repo.update(id.clone(), patch).await?;
        updated.ok_or_else(|| not_found(id))
    }

    /// Delete every landmark with `id`. Succeeds whether or not one existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_landmark(&self, id: LandmarkId) -> Result<(), WanderlogError> {
        let removed = self.repo.delete(id.clone()).await?;
        tracing::debug!(%id, removed, "landmark delete");
        Ok(())
    }
}

fn not_found(id: LandmarkId) -> WanderlogError {
    NotFoundError {
        entity: "Landmark",
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryLandmarkRepo {
        store: Mutex<Vec<Landmark>>,
    }

    impl LandmarkRepository for InMemoryLandmarkRepo {
        fn create(
            &self,
            landmark: Landmark,
        ) -> impl Future<Output = Result<Landmark, WanderlogError>> + Send {
            self.store.lock().unwrap().push(landmark.clone());
            async { Ok(landmark) }
        }

        fn get_by_id(
            &self,
            id: LandmarkId,
        ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.iter().find(|l| l.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Landmark>, WanderlogError>> + Send {
            let result = self.store.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn update(
            &self,
            id: LandmarkId,
            patch: Fields,
        ) -> impl Future<Output = Result<Option<Landmark>, WanderlogError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.iter_mut().find(|l| l.id == id).map(|l| {
                l.merge(patch);
                l.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: LandmarkId,
        ) -> impl Future<Output = Result<usize, WanderlogError>> + Send {
            let mut store = self.store.lock().unwrap();
            let before = store.len();
            store.retain(|l| l.id != id);
            let removed = before - store.len();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> LandmarkService<InMemoryLandmarkRepo> {
        LandmarkService::new(InMemoryLandmarkRepo::default())
    }

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn should_get_created_landmark_by_returned_id() {
        let svc = make_service();
        let created = svc
            .create_landmark(fields(json!({"name": "Eiffel Tower", "country": "France"})))
            .await
            .unwrap();

        let fetched = svc.get_landmark(created.id.clone()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_replace_client_supplied_id_on_create() {
        let svc = make_service();
        let created = svc
            .create_landmark(fields(json!({"id": "mine", "name": "Louvre"})))
            .await
            .unwrap();
        assert_ne!(created.id.as_str(), "mine");
    }

    #[tokio::test]
    async fn should_list_landmarks_in_creation_order() {
        let svc = make_service();
        for name in ["a", "b", "c"] {
            svc.create_landmark(fields(json!({"name": name})))
                .await
                .unwrap();
        }

        let names: Vec<Value> = svc
            .list_landmarks()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.fields["name"].clone())
            .collect();
        assert_eq!(names, [json!("a"), json!("b"), json!("c")]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_landmark_missing() {
        let svc = make_service();
        let result = svc.get_landmark(LandmarkId::from("nope")).await;
        assert!(matches!(result, Err(WanderlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_merge_patch_on_update() {
        let svc = make_service();
        let created = svc
            .create_landmark(fields(json!({"name": "Big Ben", "city": "London"})))
            .await
            .unwrap();

        svc.update_landmark(created.id.clone(), fields(json!({"name": "Elizabeth Tower"})))
            .await
            .unwrap();

        let fetched = svc.get_landmark(created.id.clone()).await.unwrap();
        assert_eq!(fetched.fields["name"], "Elizabeth Tower");
        assert_eq!(fetched.fields["city"], "London");
    }

    #[tokio::test]
    async fn should_leave_collection_unchanged_when_updating_missing_landmark() {
        let svc = make_service();
        svc.create_landmark(fields(json!({"name": "a"})))
            .await
            .unwrap();
        let before = svc.list_landmarks().await.unwrap();

        let result = svc
            .update_landmark(LandmarkId::from("nope"), fields(json!({"name": "b"})))
            .await;

        assert!(matches!(result, Err(WanderlogError::NotFound(_))));
        assert_eq!(svc.list_landmarks().await.unwrap(), before);
    }

    #[tokio::test]
    async fn should_delete_landmark() {
        let svc = make_service();
        let created = svc
            .create_landmark(fields(json!({"name": "a"})))
            .await
            .unwrap();

        svc.delete_landmark(created.id.clone()).await.unwrap();

        let result = svc.get_landmark(created.id).await;
        assert!(matches!(result, Err(WanderlogError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_missing_landmark() {
        let svc = make_service();
        assert!(svc.delete_landmark(LandmarkId::from("nope")).await.is_ok());
    }
}
