//! # wanderlog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/landmarks`, `/visited`, `/health`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses with
//!   `{"message": ...}` error bodies
//!
//! ## Dependency rule
//! Depends on `wanderlog-app` (for port traits and services) and
//! `wanderlog-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
