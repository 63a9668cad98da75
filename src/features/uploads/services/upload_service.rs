use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::uploads::dtos::{
    extension_of, generate_storage_filename, is_extension_allowed, IncomingFile, UploadedFileDto,
};
use crate::features::uploads::models::{FileKind, Upload};
use crate::modules::storage::LocalFileStore;
use crate::shared::constants::MAX_FILE_SIZE;
use crate::shared::validation::sanitize_filename;

/// A batch file that passed validation, ready to be written and recorded
struct ValidatedFile {
    original_filename: String,
    storage_filename: String,
    kind: FileKind,
    size: i64,
    data: Vec<u8>,
}

/// Service for upload intake and file retrieval
pub struct UploadService {
    pool: PgPool,
    file_store: Arc<LocalFileStore>,
}

impl UploadService {
    pub fn new(pool: PgPool, file_store: Arc<LocalFileStore>) -> Self {
        Self { pool, file_store }
    }

    /// Ingest a batch of uploaded files.
    ///
    /// The whole batch is validated up front; any failure rejects the
    /// batch before a single byte reaches the file store. Blobs are then
    /// written to disk and the metadata rows committed in one
    /// transaction. A failure after the first disk write strands the
    /// already-written blobs: the filesystem side is not transactional,
    /// which is an accepted durability gap.
    pub async fn upload_files(
        &self,
        uploader_name: &str,
        message: Option<String>,
        files: Vec<IncomingFile>,
    ) -> Result<Vec<UploadedFileDto>> {
        let uploader_name = uploader_name.trim();
        if uploader_name.is_empty() {
            return Err(AppError::Validation(
                "Uploader name is required".to_string(),
            ));
        }

        // Covers both an empty batch and a batch of nameless parts
        if files.iter().all(|f| f.name.is_empty()) {
            return Err(AppError::Validation("No files were provided".to_string()));
        }

        let mut validated = Vec::with_capacity(files.len());
        for file in files {
            if file.name.is_empty() {
                continue;
            }

            let ext = match extension_of(&file.name) {
                Some(ext) if is_extension_allowed(&ext) => ext,
                _ => {
                    return Err(AppError::Validation(format!(
                        "Unsupported file type: {}",
                        file.name
                    )));
                }
            };

            if file.data.len() > MAX_FILE_SIZE {
                return Err(AppError::Validation(format!(
                    "File too large: {}",
                    file.name
                )));
            }

            validated.push(ValidatedFile {
                original_filename: sanitize_filename(&file.name),
                storage_filename: generate_storage_filename(&ext),
                kind: FileKind::from_extension(&ext),
                size: file.data.len() as i64,
                data: file.data,
            });
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin upload transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let mut summaries = Vec::with_capacity(validated.len());
        for file in &validated {
            self.file_store
                .save(&file.storage_filename, &file.data)
                .await?;

            let upload = sqlx::query_as::<_, Upload>(
                r#"
                INSERT INTO uploads (
                    uploader_name, filename, original_filename,
                    file_type, file_size, message
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, uploader_name, filename, original_filename,
                          file_type, file_size, message, upload_date, is_approved
                "#,
            )
            .bind(uploader_name)
            .bind(&file.storage_filename)
            .bind(&file.original_filename)
            .bind(file.kind.as_str())
            .bind(file.size)
            .bind(message.as_deref())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert upload: {:?}", e);
                AppError::Database(e)
            })?;

            summaries.push(UploadedFileDto {
                original_filename: upload.original_filename,
                size: upload.file_size,
            });
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit upload batch: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Upload batch stored: uploader={}, files={}",
            uploader_name,
            summaries.len()
        );

        Ok(summaries)
    }

    /// Read the raw bytes of a previously stored file
    pub async fn read_file(&self, filename: &str) -> Result<Vec<u8>> {
        self.file_store.read(filename).await
    }
}
