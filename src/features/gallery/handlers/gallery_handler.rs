use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::gallery::dtos::GalleryEntryDto;
use crate::features::gallery::services::GalleryService;
use crate::shared::types::{ApiResponse, Meta};

/// Public gallery of approved images, newest first
#[utoipa::path(
    get,
    path = "/gallery",
    tag = "gallery",
    responses(
        (status = 200, description = "Approved image entries", body = ApiResponse<Vec<GalleryEntryDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_gallery(
    State(service): State<Arc<GalleryService>>,
) -> Result<Json<ApiResponse<Vec<GalleryEntryDto>>>> {
    let entries = service.list_gallery().await?;
    let total = entries.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(entries),
        None,
        Some(Meta { total }),
    )))
}
