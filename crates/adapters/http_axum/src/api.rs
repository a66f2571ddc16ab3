//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod villas;

use axum::Router;
use axum::routing::get;

use villa_app::ports::VillaRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<VR>() -> Router<AppState<VR>>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/villas",
            get(villas::list::<VR>)
                .post(villas::create::<VR>)
                .put(villas::replace::<VR>),
        )
        .route(
            "/villas/{id}",
            get(villas::get::<VR>)
                .delete(villas::delete::<VR>)
                .patch(villas::patch::<VR>),
        )
}
