//! # wanderlog-domain
//!
//! Pure domain model for the wanderlog record keeper.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Landmarks** (free-form records a client curates)
//! - Define **Visits** (free-form records logged against a landmark)
//! - Contain the field rules: generated ids, shallow merge, required fields
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;

pub mod landmark;
pub mod visit;
