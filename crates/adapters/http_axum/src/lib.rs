//! # villa-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** for villa records under `/api/villas`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and [`VillaError`](villa_domain::error::VillaError)
//!   categories into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `villa-app` (for port traits and services) and `villa-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
