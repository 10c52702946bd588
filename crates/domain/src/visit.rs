//! Visit: a record that someone visited a landmark on a given date.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, WanderlogError};
use crate::id::VisitId;
use crate::record::{Fields, is_truthy, strip_id};

/// Fields a visit must carry, checked for truthiness at creation.
pub const REQUIRED_FIELDS: [&str; 3] = ["landmark_id", "visited_date", "visitor_name"];

/// A visit: a server-owned `id` plus the client fields, which include at
/// least [`REQUIRED_FIELDS`] when created through [`VisitBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: VisitId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Visit {
    /// Create a builder for constructing a [`Visit`].
    #[must_use]
    pub fn builder() -> VisitBuilder {
        VisitBuilder::default()
    }

    /// The visited landmark's id, when it is a string.
    #[must_use]
    pub fn landmark_id(&self) -> Option<&str> {
        self.fields.get("landmark_id").and_then(|v| v.as_str())
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`WanderlogError::Validation`] listing every required field
    /// that is absent or falsy.
    pub fn validate(&self) -> Result<(), WanderlogError> {
        validate_required(&self.fields)
    }
}

fn validate_required(fields: &Fields) -> Result<(), WanderlogError> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|key| !fields.get(*key).is_some_and(is_truthy))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFields(missing).into())
    }
}

/// Step-by-step builder for [`Visit`].
#[derive(Debug, Default)]
pub struct VisitBuilder {
    id: Option<VisitId>,
    fields: Fields,
}

impl VisitBuilder {
    #[must_use]
    pub fn id(mut self, id: VisitId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the client fields. A client-supplied `id` is discarded.
    #[must_use]
    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = strip_id(fields);
        self
    }

    /// Consume the builder, validate, and return a [`Visit`].
    ///
    /// # Errors
    ///
    /// Returns [`WanderlogError::Validation`] if a required field is absent
    /// or falsy.
    pub fn build(self) -> Result<Visit, WanderlogError> {
        let visit = Visit {
            id: self.id.unwrap_or_default(),
            fields: self.fields,
        };
        visit.validate()?;
        Ok(visit)
    }
}
