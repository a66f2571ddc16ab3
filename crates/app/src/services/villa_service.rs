//! Villa service — use-cases for managing villa records.

use villa_domain::error::{BadRequestError, ConflictError, NotFoundError, VillaError};
use villa_domain::id::VillaId;
use villa_domain::patch::PatchDocument;
use villa_domain::villa::Villa;

use crate::ports::VillaRepository;

/// Application service for villa CRUD operations.
///
/// Optional payloads model an absent request body: the transport layer
/// passes `None` when the client sent JSON `null`.
pub struct VillaService<R> {
    repo: R,
}

impl<R: VillaRepository> VillaService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all villas in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_villas(&self) -> Result<Vec<Villa>, VillaError> {
        tracing::info!("getting all villas");
        self.repo.get_all().await
    }

    /// Look up a villa by id.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::BadRequest`] for the `0` sentinel and
    /// [`VillaError::NotFound`] when no villa with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_villa(&self, id: VillaId) -> Result<Villa, VillaError> {
        reject_sentinel(id)?;
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::villa(id).into())
    }

    /// Create a villa, assigning it the next identity.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::BadRequest`] when `candidate` is absent,
    /// [`VillaError::Conflict`] when it carries a positive id, and
    /// [`VillaError::Validation`] when a field is invalid or the name is
    /// already taken.
    #[tracing::instrument(skip(self, candidate))]
    pub async fn create_villa(&self, candidate: Option<Villa>) -> Result<Villa, VillaError> {
        let candidate = candidate.ok_or(BadRequestError::MissingBody)?;
        if candidate.id.is_assigned() {
            tracing::warn!(id = %candidate.id, "client supplied a villa id on create");
            return Err(ConflictError::ClientAssignedId(candidate.id).into());
        }
        candidate.validate()?;

        let created = self.repo.create(candidate).await?;
        tracing::info!(id = %created.id, name = %created.name, "villa created");
        Ok(created)
    }

    /// Delete a villa by id.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::BadRequest`] for the `0` sentinel and
    /// [`VillaError::NotFound`] when nothing was removed.
    #[tracing::instrument(skip(self))]
    pub async fn delete_villa(&self, id: VillaId) -> Result<(), VillaError> {
        reject_sentinel(id)?;
        if self.repo.delete(id).await? {
            tracing::info!(%id, "villa deleted");
            Ok(())
        } else {
            Err(NotFoundError::villa(id).into())
        }
    }

    /// Replace the name, occupancy and square footage of an existing villa.
    ///
    /// The target is `updated.id`; the stored id never changes.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::NotFound`] when `updated` is absent,
    /// [`VillaError::Validation`] when a field is invalid, and
    /// [`VillaError::BadRequest`] when no villa has `updated.id`.
    #[tracing::instrument(skip(self, updated))]
    pub async fn replace_villa(&self, updated: Option<Villa>) -> Result<Villa, VillaError> {
        let updated = updated.ok_or_else(NotFoundError::missing_villa)?;
        updated.validate()?;

        let id = updated.id;
        let stored = self
            .repo
            .update(updated)
            .await?
            .ok_or(BadRequestError::UnknownTarget(id))?;
        tracing::info!(%id, "villa replaced");
        Ok(stored)
    }

    /// Apply a patch document to an existing villa.
    ///
    /// The document is applied to a copy inside a single repository
    /// `modify`; the copy is stored only if every operation succeeds and the
    /// result passes validation.
    ///
    /// # Errors
    ///
    /// Returns [`VillaError::BadRequest`] for the `0` sentinel or an absent
    /// document, [`VillaError::NotFound`] when no villa has `id`, and
    /// [`VillaError::Validation`] when the patch is malformed or produces an
    /// invalid record.
    #[tracing::instrument(skip(self, patch))]
    pub async fn patch_villa(
        &self,
        id: VillaId,
        patch: Option<PatchDocument>,
    ) -> Result<Villa, VillaError> {
        reject_sentinel(id)?;
        let patch = patch.ok_or(BadRequestError::MissingBody)?;

        let stored = self
            .repo
            .modify(id, |current| patch.apply_to(current))
            .await
            .inspect_err(|err| tracing::warn!(%id, error = %err, "rejected villa patch"))?
            .ok_or_else(|| NotFoundError::villa(id))?;
        tracing::info!(%id, operations = patch.operations().len(), "villa patched");
        Ok(stored)
    }
}

fn reject_sentinel(id: VillaId) -> Result<(), VillaError> {
    if id.is_sentinel() {
        tracing::warn!(%id, "got villa error with sentinel id");
        return Err(BadRequestError::SentinelId.into());
    }
    Ok(())
}
