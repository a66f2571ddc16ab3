//! Typed integer identifier for villa records.
//!
//! Identifiers are assigned by the service. `0` is the sentinel meaning
//! "unassigned" on create payloads and "invalid" in request paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a [`Villa`](crate::villa::Villa).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VillaId(i64);

impl VillaId {
    /// The sentinel value carried by records that have not been stored yet.
    pub const UNASSIGNED: Self = Self(0);

    /// The identity handed out when the collection is empty.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the inner integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// `true` for the `0` sentinel.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }

    /// `true` when the id looks like a server-assigned identity.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }

    /// The identity following `self`, or `None` at `i64::MAX`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Max-plus-one over `ids`, or [`VillaId::FIRST`] when empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IdsExhausted`] when the highest id is
    /// `i64::MAX`.
    pub fn next_after<I>(ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Self>,
    {
        match ids.into_iter().max() {
            None => Ok(Self::FIRST),
            Some(max) => max.next().ok_or(ValidationError::IdsExhausted(max)),
        }
    }
}

impl fmt::Display for VillaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VillaId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
