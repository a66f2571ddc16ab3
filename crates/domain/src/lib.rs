//! # villa-domain
//!
//! Pure domain model for the villa service.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`VillaId`](id::VillaId) and error conventions
//! - Define the **Villa** record and its field invariants
//! - Define **patch documents** (field-level add/replace/remove operations)
//!   and how they apply to a villa
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod patch;
pub mod villa;
