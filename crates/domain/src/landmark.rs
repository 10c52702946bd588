//! Landmark: a free-form record a client curates.

use serde::{Deserialize, Serialize};

use crate::id::LandmarkId;
use crate::record::{Fields, merge_fields, strip_id};

/// A landmark: a server-owned `id` plus whatever fields the client sent.
///
/// Serializes as a single flat JSON object with `id` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Landmark {
    /// Create a builder for constructing a [`Landmark`].
    #[must_use]
    pub fn builder() -> LandmarkBuilder {
        LandmarkBuilder::default()
    }

    /// Shallow-merge `patch` onto this landmark.
    ///
    /// Keys present in `patch` overwrite existing ones, all other keys are
    /// kept. An `id` key in `patch` is ignored.
    pub fn merge(&mut self, patch: Fields) {
        merge_fields(&mut self.fields, patch);
    }
}

/// Step-by-step builder for [`Landmark`].
#[derive(Debug, Default)]
pub struct LandmarkBuilder {
    id: Option<LandmarkId>,
    fields: Fields,
}

impl LandmarkBuilder {
    #[must_use]
    pub fn id(mut self, id: LandmarkId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the client fields. A client-supplied `id` is discarded.
    #[must_use]
    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = strip_id(fields);
        self
    }

    /// Consume the builder and return a [`Landmark`], generating an id
    /// when none was set.
    #[must_use]
    pub fn build(self) -> Landmark {
        Landmark {
            id: self.id.unwrap_or_default(),
            fields: self.fields,
        }
    }
}
