//! Repository construction and demo seed data.

use villa_domain::id::VillaId;
use villa_domain::villa::Villa;

use crate::villa_repo::InMemoryVillaRepository;

/// Configuration for the in-memory storage adapter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Start with the demo villas instead of an empty collection.
    pub seed_demo_data: bool,
}

impl Config {
    /// Build an [`InMemoryVillaRepository`] from this configuration.
    #[must_use]
    pub fn build(self) -> InMemoryVillaRepository {
        if self.seed_demo_data {
            let villas = demo_villas();
            tracing::info!(count = villas.len(), "seeding demo villas");
            InMemoryVillaRepository::with_villas(villas)
        } else {
            InMemoryVillaRepository::new()
        }
    }
}

/// The two records the service ships with for local experimentation.
#[must_use]
pub fn demo_villas() -> Vec<Villa> {
    vec![
        Villa {
            id: VillaId::new(1),
            name: "Pool View".to_string(),
            occupancy: 4,
            sqft: 100,
        },
        Villa {
            id: VillaId::new(2),
            name: "Beach View".to_string(),
            occupancy: 3,
            sqft: 300,
        },
    ]
}
