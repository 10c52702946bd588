//! # wanderlog-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LandmarkRepository`: CRUD for landmarks
//!   - `VisitRepository`: append & read for visits
//! - Define **driving/inbound ports** as use-case structs:
//!   - `LandmarkService`: list, get, create, update, delete
//!   - `VisitService`: list, get, create (with required-field validation)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `wanderlog-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
