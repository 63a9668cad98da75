use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contacts::models::Contact;
use crate::features::moderation::dtos::{AdminContactDto, AdminUploadDto, UploadStatsDto};
use crate::features::uploads::models::Upload;

/// Service for admin moderation queries
pub struct ModerationService {
    pool: PgPool,
}

impl ModerationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every upload, newest first
    pub async fn list_uploads(&self) -> Result<Vec<AdminUploadDto>> {
        let uploads = sqlx::query_as::<_, Upload>(
            r#"
            SELECT id, uploader_name, filename, original_filename,
                   file_type, file_size, message, upload_date, is_approved
            FROM uploads
            ORDER BY upload_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list uploads: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(uploads.into_iter().map(AdminUploadDto::from).collect())
    }

    /// List every contact message, newest first
    pub async fn list_contacts(&self) -> Result<Vec<AdminContactDto>> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, name, email, message, created_date, is_read
            FROM contacts
            ORDER BY created_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list contacts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(contacts.into_iter().map(AdminContactDto::from).collect())
    }

    /// Approve one upload for the public gallery.
    ///
    /// Idempotent: approving an already-approved upload succeeds.
    /// is_approved only ever transitions false to true.
    pub async fn approve_upload(&self, id: i64) -> Result<()> {
        let approved = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE uploads
            SET is_approved = TRUE
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to approve upload {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        match approved {
            Some(_) => {
                tracing::info!("Upload approved: id={}", id);
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Upload {} not found", id))),
        }
    }

    /// Aggregate upload counters for the admin dashboard
    pub async fn upload_stats(&self) -> Result<UploadStatsDto> {
        let stats = sqlx::query_as::<_, UploadStatsDto>(
            r#"
            SELECT
                COUNT(*) AS total_uploads,
                COUNT(*) FILTER (WHERE is_approved) AS approved_uploads,
                COUNT(*) FILTER (WHERE NOT is_approved) AS pending_uploads,
                COUNT(*) FILTER (WHERE file_type = 'image') AS image_count,
                COUNT(*) FILTER (WHERE file_type = 'video') AS video_count,
                COALESCE(SUM(file_size), 0)::BIGINT AS total_size_bytes
            FROM uploads
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute upload stats: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(stats)
    }
}
