//! In-memory implementation of [`VillaRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use villa_app::ports::VillaRepository;
use villa_domain::error::{ValidationError, VillaError};
use villa_domain::id::VillaId;
use villa_domain::villa::Villa;

/// Ordered, lock-guarded villa collection.
///
/// Reads share the lock; `create`, `update`, `modify` and `delete` take it
/// exclusively, so identity assignment and read-modify-write cannot
/// interleave.
#[derive(Debug, Default)]
pub struct InMemoryVillaRepository {
    villas: RwLock<Vec<Villa>>,
}

impl InMemoryVillaRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `villas` as-is, ids included.
    #[must_use]
    pub fn with_villas(villas: Vec<Villa>) -> Self {
        Self {
            villas: RwLock::new(villas),
        }
    }
}

impl VillaRepository for InMemoryVillaRepository {
    fn create(&self, mut villa: Villa) -> impl Future<Output = Result<Villa, VillaError>> + Send {
        async move {
            let mut villas = self.villas.write().await;
            if villas.iter().any(|existing| existing.has_name(&villa.name)) {
                return Err(VillaError::from(ValidationError::DuplicateName(villa.name)));
            }
            villa.id = VillaId::next_after(villas.iter().map(|existing| existing.id))?;
            villas.push(villa.clone());
            tracing::debug!(id = %villa.id, total = villas.len(), "stored villa");
            Ok(villa)
        }
    }

    fn get_by_id(
        &self,
        id: VillaId,
    ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send {
        async move {
            let villas = self.villas.read().await;
            Ok(villas.iter().find(|villa| villa.id == id).cloned())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Villa>, VillaError>> + Send {
        async move { Ok(self.villas.read().await.clone()) }
    }

    fn update(
        &self,
        villa: Villa,
    ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send {
        async move {
            let mut villas = self.villas.write().await;
            Ok(villas
                .iter_mut()
                .find(|stored| stored.id == villa.id)
                .map(|stored| {
                    stored.overwrite_from(&villa);
                    stored.clone()
                }))
        }
    }

    fn modify<F>(
        &self,
        id: VillaId,
        f: F,
    ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send
    where
        F: FnOnce(&Villa) -> Result<Villa, VillaError> + Send,
    {
        async move {
            let mut villas = self.villas.write().await;
            let Some(stored) = villas.iter_mut().find(|villa| villa.id == id) else {
                return Ok(None);
            };
            let changed = f(stored)?;
            stored.overwrite_from(&changed);
            Ok(Some(stored.clone()))
        }
    }

    fn delete(&self, id: VillaId) -> impl Future<Output = Result<bool, VillaError>> + Send {
        async move {
            let mut villas = self.villas.write().await;
            match villas.iter().position(|villa| villa.id == id) {
                Some(index) => {
                    villas.remove(index);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Barrier;
    use villa_app::services::villa_service::VillaService;

    fn villa(name: &str) -> Villa {
        Villa::builder()
            .name(name)
            .occupancy(3)
            .sqft(250)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_max_plus_one_ids() {
        let repo = InMemoryVillaRepository::new();

        let a = repo.create(villa("A")).await.unwrap();
        let b = repo.create(villa("B")).await.unwrap();
        assert_eq!(a.id, VillaId::new(1));
        assert_eq!(b.id, VillaId::new(2));

        assert!(repo.delete(a.id).await.unwrap());
        let c = repo.create(villa("C")).await.unwrap();
        assert_eq!(c.id, VillaId::new(3));
    }

    #[tokio::test]
    async fn should_continue_after_highest_seeded_id() {
        let mut seeded = villa("Seeded");
        seeded.id = VillaId::new(10);
        let repo = InMemoryVillaRepository::with_villas(vec![seeded]);

        let created = repo.create(villa("Fresh")).await.unwrap();
        assert_eq!(created.id, VillaId::new(11));
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_ignoring_case() {
        let repo = InMemoryVillaRepository::new();
        repo.create(villa("Pool View")).await.unwrap();

        let result = repo.create(villa("POOL VIEW")).await;
        assert!(matches!(
            result,
            Err(VillaError::Validation(ValidationError::DuplicateName(_)))
        ));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_preserve_insertion_order() {
        let repo = InMemoryVillaRepository::new();
        for name in ["C", "A", "B"] {
            repo.create(villa(name)).await.unwrap();
        }
        repo.delete(VillaId::new(2)).await.unwrap();

        let names: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["C", "B"]);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_record() {
        let repo = InMemoryVillaRepository::new();
        let mut ghost = villa("Ghost");
        ghost.id = VillaId::new(4);

        assert!(repo.update(ghost).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_update_fields_in_place() {
        let repo = InMemoryVillaRepository::new();
        let created = repo.create(villa("A")).await.unwrap();

        let mut changed = created.clone();
        changed.occupancy = 12;
        let stored = repo.update(changed).await.unwrap().unwrap();

        assert_eq!(stored.occupancy, 12);
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap().unwrap().occupancy,
            12
        );
    }

    #[tokio::test]
    async fn should_refuse_create_when_ids_are_exhausted() {
        let mut last = villa("Last");
        last.id = VillaId::new(i64::MAX);
        let repo = InMemoryVillaRepository::with_villas(vec![last]);

        let result = repo.create(villa("Overflow")).await;
        assert!(matches!(
            result,
            Err(VillaError::Validation(ValidationError::IdsExhausted(_)))
        ));
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_commit_modified_record() {
        let repo = InMemoryVillaRepository::new();
        let created = repo.create(villa("A")).await.unwrap();

        let stored = repo
            .modify(created.id, |current| {
                let mut changed = current.clone();
                changed.sqft = 999;
                Ok(changed)
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.sqft, 999);
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn should_not_commit_when_modify_fails() {
        let repo = InMemoryVillaRepository::new();
        let created = repo.create(villa("A")).await.unwrap();

        let result = repo
            .modify(created.id, |_| Err(ValidationError::EmptyName.into()))
            .await;

        assert!(matches!(result, Err(VillaError::Validation(_))));
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn should_return_none_when_modifying_missing_record() {
        let repo = InMemoryVillaRepository::new();
        let result = repo
            .modify(VillaId::new(3), |current| Ok(current.clone()))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    /// Delegates to the in-memory store, but holds every `get_by_id` until
    /// two callers are waiting, so two reads always interleave.
    struct InterleavingRepo {
        inner: InMemoryVillaRepository,
        gate: Barrier,
    }

    impl VillaRepository for InterleavingRepo {
        fn create(&self, villa: Villa) -> impl Future<Output = Result<Villa, VillaError>> + Send {
            self.inner.create(villa)
        }

        fn get_by_id(
            &self,
            id: VillaId,
        ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send {
            async move {
                self.gate.wait().await;
                self.inner.get_by_id(id).await
            }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Villa>, VillaError>> + Send {
            self.inner.get_all()
        }

        fn update(
            &self,
            villa: Villa,
        ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send {
            self.inner.update(villa)
        }

        fn modify<F>(
            &self,
            id: VillaId,
            f: F,
        ) -> impl Future<Output = Result<Option<Villa>, VillaError>> + Send
        where
            F: FnOnce(&Villa) -> Result<Villa, VillaError> + Send,
        {
            self.inner.modify(id, f)
        }

        fn delete(&self, id: VillaId) -> impl Future<Output = Result<bool, VillaError>> + Send {
            self.inner.delete(id)
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn should_keep_both_concurrent_patches_to_different_fields() {
        let mut seeded = villa("A");
        seeded.id = VillaId::new(1);
        let svc = Arc::new(VillaService::new(InterleavingRepo {
            inner: InMemoryVillaRepository::with_villas(vec![seeded]),
            gate: Barrier::new(2),
        }));

        let handles: Vec<_> = [("/occupancy", 10), ("/sqft", 999)]
            .into_iter()
            .map(|(path, value)| {
                let svc = Arc::clone(&svc);
                let doc = serde_json::from_value(json!([
                    { "op": "replace", "path": path, "value": value }
                ]))
                .unwrap();
                tokio::spawn(async move { svc.patch_villa(VillaId::new(1), Some(doc)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = svc.list_villas().await.unwrap();
        assert_eq!(stored[0].occupancy, 10);
        assert_eq!(stored[0].sqft, 999);
    }

    #[tokio::test]
    async fn should_return_false_when_deleting_twice() {
        let repo = InMemoryVillaRepository::new();
        let created = repo.create(villa("A")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_assign_unique_ids_under_concurrent_creates() {
        let repo = Arc::new(InMemoryVillaRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|n| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(villa(&format!("Villa {n}"))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<_> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id.get())
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
