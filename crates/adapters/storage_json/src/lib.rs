//! # wanderlog-adapter-storage-json
//!
//! Flat-file persistence adapter: one pretty-printed JSON array per
//! collection.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `wanderlog-app::ports::storage`
//! - Create the data directory and seed empty documents on startup
//! - Serialize load → mutate → persist per collection
//! - Replace documents atomically (temp file, fsync, rename)
//!
//! ## Dependency rule
//! Depends on `wanderlog-app` (for port traits) and `wanderlog-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod database;
pub mod document;
pub mod error;
pub mod landmark_repo;
pub mod visit_repo;

pub use database::{Config, Database};
pub use landmark_repo::JsonLandmarkRepository;
pub use visit_repo::JsonVisitRepository;
