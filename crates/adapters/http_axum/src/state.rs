//! Shared application state for axum handlers.

use std::sync::Arc;

use villa_app::ports::VillaRepository;
use villa_app::services::villa_service::VillaService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<VR> {
    /// Villa CRUD service.
    pub villa_service: Arc<VillaService<VR>>,
}

impl<VR> Clone for AppState<VR> {
    fn clone(&self) -> Self {
        Self {
            villa_service: Arc::clone(&self.villa_service),
        }
    }
}

impl<VR> AppState<VR>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(villa_service: VillaService<VR>) -> Self {
        Self {
            villa_service: Arc::new(villa_service),
        }
    }
}
