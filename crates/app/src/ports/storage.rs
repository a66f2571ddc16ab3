//! Storage port — repository trait for the villa collection.

use std::future::Future;

use villa_domain::error::VillaError;
use villa_domain::id::VillaId;
use villa_domain::villa::Villa;

/// Ordered store of [`Villa`] records.
///
/// Implementations must make each method atomic with respect to the others.
/// In particular `create` has to run its duplicate-name check, identity
/// assignment and insert as one critical section, and `modify` has to read,
/// transform and commit without releasing the record in between.
pub trait VillaRepository {
    /// Assign the next identity (max-plus-one) to `villa` and append it.
    ///
    /// Fails with [`ValidationError::DuplicateName`] when a stored record has
    /// the same name, compared case-insensitively, and with
    /// [`ValidationError::IdsExhausted`] when no higher id exists.
    ///
    /// [`ValidationError::DuplicateName`]: villa_domain::error::ValidationError::DuplicateName
    /// [`ValidationError::IdsExhausted`]: villa_domain::error::ValidationError::IdsExhausted
    fn create(&self, villa: Villa) -> impl Future<Output = Result<Villa, VillaError>> + Send;

    /// Get a villa by its identity.
    fn get_by_id(
        &self,
        id: VillaId,
    ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send;

    /// Get all villas in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Villa>, VillaError>> + Send;

    /// Overwrite the mutable fields of the record whose id is `villa.id`.
    ///
    /// Returns `None` when no such record exists.
    fn update(
        &self,
        villa: Villa,
    ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send;

    /// Run `f` against the stored record with `id` and commit the villa it
    /// returns, as one step.
    ///
    /// Returns `None` when no such record exists. An error from `f` is
    /// returned as-is and nothing is written.
    fn modify<F>(
        &self,
        id: VillaId,
        f: F,
    ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send
    where
        F: FnOnce(&Villa) -> Result<Villa, VillaError> + Send;

    /// Remove a villa. Returns `false` when nothing matched.
    fn delete(&self, id: VillaId) -> impl Future<Output = Result<bool, VillaError>> + Send;
}
