//! # villa-adapter-storage-memory
//!
//! Process-lifetime storage for villa records.
//!
//! ## Responsibilities
//! - Implement the `VillaRepository` port defined in `villa-app::ports::storage`
//! - Guard the shared collection with a reader/writer lock so concurrent
//!   requests never race
//! - Optionally seed the collection with demo records at startup
//!
//! ## Dependency rule
//! Depends on `villa-app` (for port traits) and `villa-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod seed;
pub mod villa_repo;

pub use seed::Config;
pub use villa_repo::InMemoryVillaRepository;
