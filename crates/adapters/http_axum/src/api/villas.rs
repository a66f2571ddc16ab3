//! JSON REST handlers for villas.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use villa_app::ports::VillaRepository;
use villa_domain::id::VillaId;
use villa_domain::patch::PatchDocument;
use villa_domain::villa::Villa;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a villa.
///
/// Every field is optional on the wire so that missing values surface as
/// domain validation errors rather than extractor rejections.
#[derive(Deserialize)]
pub struct VillaRequest {
    #[serde(default)]
    pub id: VillaId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub occupancy: i32,
    #[serde(default)]
    pub sqft: i32,
}

impl From<VillaRequest> for Villa {
    fn from(req: VillaRequest) -> Self {
        Self {
            id: req.id,
            name: req.name,
            occupancy: req.occupancy,
            sqft: req.sqft,
        }
    }
}

/// Location of a single villa, as served by [`get`].
#[must_use]
pub fn location(id: VillaId) -> String {
    format!("/api/villas/{id}")
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Villa>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Villa>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Villa>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => {
                let location = location(json.0.id);
                (StatusCode::CREATED, [(header::LOCATION, location)], json).into_response()
            }
        }
    }
}

/// Possible responses from the replace and patch endpoints.
pub enum UpdateResponse {
    Ok,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/villas`
pub async fn list<VR>(State(state): State<AppState<VR>>) -> Result<ListResponse, ApiError>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    let villas = state.villa_service.list_villas().await?;
    Ok(ListResponse::Ok(Json(villas)))
}

/// `GET /api/villas/:id`
pub async fn get<VR>(
    State(state): State<AppState<VR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    let villa = state.villa_service.get_villa(VillaId::new(id)).await?;
    Ok(GetResponse::Ok(Json(villa)))
}

/// `POST /api/villas`
pub async fn create<VR>(
    State(state): State<AppState<VR>>,
    Json(req): Json<Option<VillaRequest>>,
) -> Result<CreateResponse, ApiError>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    let created = state
        .villa_service
        .create_villa(req.map(Villa::from))
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `DELETE /api/villas/:id`
pub async fn delete<VR>(
    State(state): State<AppState<VR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    state.villa_service.delete_villa(VillaId::new(id)).await?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/villas` — the target is the `id` carried in the body.
pub async fn replace<VR>(
    State(state): State<AppState<VR>>,
    Json(req): Json<Option<VillaRequest>>,
) -> Result<UpdateResponse, ApiError>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    state
        .villa_service
        .replace_villa(req.map(Villa::from))
        .await?;
    Ok(UpdateResponse::Ok)
}

/// `PATCH /api/villas/:id`
pub async fn patch<VR>(
    State(state): State<AppState<VR>>,
    Path(id): Path<i64>,
    Json(patch): Json<Option<PatchDocument>>,
) -> Result<UpdateResponse, ApiError>
where
    VR: VillaRepository + Send + Sync + 'static,
{
    state
        .villa_service
        .patch_villa(VillaId::new(id), patch)
        .await?;
    Ok(UpdateResponse::Ok)
}
