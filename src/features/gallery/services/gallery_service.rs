use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::gallery::dtos::GalleryEntryDto;

/// Service for the public gallery
pub struct GalleryService {
    pool: PgPool,
}

impl GalleryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Approved images, newest first.
    ///
    /// Videos stay out of the public gallery even when approved.
    pub async fn list_gallery(&self) -> Result<Vec<GalleryEntryDto>> {
        let entries = sqlx::query_as::<_, GalleryEntryDto>(
            r#"
            SELECT id, filename, file_type, uploader_name, upload_date
            FROM uploads
            WHERE is_approved AND file_type = 'image'
            ORDER BY upload_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list gallery: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(entries)
    }
}
