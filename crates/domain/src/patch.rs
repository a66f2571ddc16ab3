//! Patch documents — partial updates expressed as field-level operations.
//!
//! The wire format follows JSON Patch for the subset that makes sense on a
//! flat record:
//!
//! ```json
//! [
//!   { "op": "replace", "path": "/occupancy", "value": 10 },
//!   { "op": "remove",  "path": "/sqft" }
//! ]
//! ```
//!
//! `add` on a scalar field behaves like `replace`; `remove` resets the field
//! to its default. Only `name`, `occupancy` and `sqft` are addressable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ValidationError, VillaError};
use crate::villa::Villa;

/// A mutable field of a [`Villa`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillaField {
    Name,
    Occupancy,
    Sqft,
}

impl VillaField {
    /// Resolve a JSON-pointer-like path (`/name`, `Occupancy`, …).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPath`] for anything other than the
    /// three mutable fields, including `/id`.
    pub fn from_path(path: &str) -> Result<Self, ValidationError> {
        let key = path.strip_prefix('/').unwrap_or(path);
        match key.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "occupancy" => Ok(Self::Occupancy),
            "sqft" => Ok(Self::Sqft),
            _ => Err(ValidationError::UnknownPath(path.to_string())),
        }
    }

    /// Canonical path of the field.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Name => "/name",
            Self::Occupancy => "/occupancy",
            Self::Sqft => "/sqft",
        }
    }

    fn set(self, villa: &mut Villa, value: &Value) -> Result<(), ValidationError> {
        let invalid = || ValidationError::InvalidValue { path: self.path() };
        match self {
            Self::Name => villa.name = value.as_str().ok_or_else(invalid)?.to_string(),
            Self::Occupancy => villa.occupancy = as_i32(value).ok_or_else(invalid)?,
            Self::Sqft => villa.sqft = as_i32(value).ok_or_else(invalid)?,
        }
        Ok(())
    }

    fn reset(self, villa: &mut Villa) {
        match self {
            Self::Name => villa.name.clear(),
            Self::Occupancy => villa.occupancy = 0,
            Self::Sqft => villa.sqft = 0,
        }
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

/// A single field-level instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PatchOperation {
    Add {
        path: String,
        #[serde(default)]
        value: Option<Value>,
    },
    Replace {
        path: String,
        #[serde(default)]
        value: Option<Value>,
    },
    Remove {
        path: String,
    },
}

impl PatchOperation {
    fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Replace { .. } => "replace",
            Self::Remove { .. } => "remove",
        }
    }

    /// Apply this operation to `villa` in place.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for unknown paths, missing values, or
    /// values of the wrong JSON type.
    pub fn apply(&self, villa: &mut Villa) -> Result<(), ValidationError> {
        match self {
            Self::Add { path, value } | Self::Replace { path, value } => {
                let field = VillaField::from_path(path)?;
                let value = value.as_ref().ok_or(ValidationError::MissingValue {
                    op: self.name(),
                    path: field.path(),
                })?;
                field.set(villa, value)
            }
            Self::Remove { path } => {
                VillaField::from_path(path)?.reset(villa);
                Ok(())
            }
        }
    }
}

/// An ordered list of [`PatchOperation`]s applied as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOperation>);

impl PatchDocument {
    #[must_use]
    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply every operation to a copy of `villa` and validate the result.
    ///
    /// `villa` itself is never touched, so a failing document leaves the
    /// caller's record unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::Validation`] if an operation is malformed or the
    /// patched record breaks a field invariant.
    pub fn apply_to(&self, villa: &Villa) -> Result<Villa, VillaError> {
        let mut patched = villa.clone();
        for operation in &self.0 {
            operation.apply(&mut patched)?;
        }
        patched.validate()?;
        Ok(patched)
    }
}
