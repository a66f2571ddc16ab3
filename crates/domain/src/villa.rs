//! Villa — the single resource managed by the service.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, VillaError};
use crate::id::VillaId;

/// Longest accepted villa name, in characters.
pub const MAX_NAME_LEN: usize = 30;

/// A rentable villa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Villa {
    pub id: VillaId,
    pub name: String,
    pub occupancy: i32,
    pub sqft: i32,
}

impl Villa {
    /// Create a builder for constructing a [`Villa`].
    #[must_use]
    pub fn builder() -> VillaBuilder {
        VillaBuilder::default()
    }

    /// Check field invariants.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::Validation`] when `name` is blank or longer than
    /// [`MAX_NAME_LEN`], or when `occupancy` or `sqft` is negative.
    pub fn validate(&self) -> Result<(), VillaError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                max: MAX_NAME_LEN,
                actual: len,
            }
            .into());
        }
        if self.occupancy < 0 {
            return Err(ValidationError::Negative { field: "occupancy" }.into());
        }
        if self.sqft < 0 {
            return Err(ValidationError::Negative { field: "sqft" }.into());
        }
        Ok(())
    }

    /// Case-insensitive name comparison used for the uniqueness check.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Overwrite the mutable fields from `other`, keeping `self.id`.
    pub fn overwrite_from(&mut self, other: &Villa) {
        self.name.clone_from(&other.name);
        self.occupancy = other.occupancy;
        self.sqft = other.sqft;
    }
}

/// Step-by-step builder for [`Villa`].
#[derive(Debug, Default)]
pub struct VillaBuilder {
    id: Option<VillaId>,
    name: Option<String>,
    occupancy: Option<i32>,
    sqft: Option<i32>,
}

impl VillaBuilder {
    #[must_use]
    pub fn id(mut self, id: VillaId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn occupancy(mut self, occupancy: i32) -> Self {
        self.occupancy = Some(occupancy);
        self
    }

    #[must_use]
    pub fn sqft(mut self, sqft: i32) -> Self {
        self.sqft = Some(sqft);
        self
    }

    /// Consume the builder, validate, and return a [`Villa`].
    ///
    /// The id defaults to [`VillaId::UNASSIGNED`].
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::Validation`] if any field invariant fails.
    pub fn build(self) -> Result<Villa, VillaError> {
        let villa = Villa {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            occupancy: self.occupancy.unwrap_or_default(),
            sqft: self.sqft.unwrap_or_default(),
        };
        villa.validate()?;
        Ok(villa)
    }
}
