//! JSON file implementation of [`VisitRepository`].

use std::future::Future;
use std::sync::Arc;

use wanderlog_app::ports::VisitRepository;
use wanderlog_domain::error::WanderlogError;
use wanderlog_domain::id::VisitId;
use wanderlog_domain::visit::Visit;

use crate::document::{Commit, JsonDocument};

/// Visit repository backed by a [`JsonDocument`].
pub struct JsonVisitRepository {
    document: Arc<JsonDocument<Visit>>,
}

impl JsonVisitRepository {
    /// Create a new repository over the given document.
    #[must_use]
    pub fn new(document: Arc<JsonDocument<Visit>>) -> Self {
        Self { document }
    }
}

impl VisitRepository for JsonVisitRepository {
    fn create(&self, visit: Visit) -> impl Future<Output = Result<Visit, WanderlogError>> + Send {
        async move {
            let created = self
                .document
                .modify(move |records| {
                    records.push(visit.clone());
                    Commit::Write(visit)
                })
                .await?;
            Ok(created)
        }
    }

    fn get_by_id(
        &self,
        id: VisitId,
    ) -> impl Future<Output = Result<Option<Visit>, WanderlogError>> + Send {
        async move {
            let records = self.document.read().await?;
            Ok(records.into_iter().find(|v| v.id == id))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Visit>, WanderlogError>> + Send {
        async move { Ok(self.document.read().await?) }
    }
}
