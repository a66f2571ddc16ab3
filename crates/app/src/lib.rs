//! # villa-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (`VillaRepository` — ordered CRUD over villa records)
//! - Define the **driving/inbound** use-case struct `VillaService`
//!   (list, get, create, delete, replace, patch)
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `villa-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
