use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::moderation::dtos::{
    AdminContactDto, AdminUploadDto, ApprovedResponseDto, UploadStatsDto,
};
use crate::features::moderation::services::ModerationService;
use crate::shared::types::{ApiResponse, Meta};

/// List all uploads, newest first
#[utoipa::path(
    get,
    path = "/admin/uploads",
    tag = "moderation",
    responses(
        (status = 200, description = "All uploads", body = ApiResponse<Vec<AdminUploadDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_uploads(
    State(service): State<Arc<ModerationService>>,
) -> Result<Json<ApiResponse<Vec<AdminUploadDto>>>> {
    let uploads = service.list_uploads().await?;
    let total = uploads.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(uploads),
        None,
        Some(Meta { total }),
    )))
}

/// List all contact messages, newest first
#[utoipa::path(
    get,
    path = "/admin/contacts",
    tag = "moderation",
    responses(
        (status = 200, description = "All contact messages", body = ApiResponse<Vec<AdminContactDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_contacts(
    State(service): State<Arc<ModerationService>>,
) -> Result<Json<ApiResponse<Vec<AdminContactDto>>>> {
    let contacts = service.list_contacts().await?;
    let total = contacts.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(contacts),
        None,
        Some(Meta { total }),
    )))
}

/// Approve one upload for the public gallery
#[utoipa::path(
    post,
    path = "/admin/uploads/{id}/approve",
    tag = "moderation",
    params(
        ("id" = i64, Path, description = "Upload id")
    ),
    responses(
        (status = 200, description = "Upload approved", body = ApiResponse<ApprovedResponseDto>),
        (status = 404, description = "Upload not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn approve_upload(
    State(service): State<Arc<ModerationService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ApprovedResponseDto>>> {
    service.approve_upload(id).await?;

    Ok(Json(ApiResponse::success(
        Some(ApprovedResponseDto { approved: true }),
        Some("Upload approved".to_string()),
        None,
    )))
}

/// Upload statistics for the admin dashboard
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "moderation",
    responses(
        (status = 200, description = "Upload statistics", body = ApiResponse<UploadStatsDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_stats(
    State(service): State<Arc<ModerationService>>,
) -> Result<Json<ApiResponse<UploadStatsDto>>> {
    let stats = service.upload_stats().await?;

    Ok(Json(ApiResponse::success(Some(stats), None, None)))
}
