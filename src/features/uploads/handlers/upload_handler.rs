use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::uploads::dtos::{
    content_type_for, IncomingFile, UploadBatchDto, UploadedFileDto,
};
use crate::features::uploads::services::UploadService;
use crate::shared::types::{ApiResponse, Meta};

/// Upload a batch of media files
///
/// Accepts multipart/form-data with:
/// - `files`: one part per file (required, at least one)
/// - `uploaderName`: name of the uploader (required)
/// - `message`: optional message stored with every file
#[utoipa::path(
    post,
    path = "/upload",
    tag = "uploads",
    request_body(
        content = UploadBatchDto,
        content_type = "multipart/form-data",
        description = "Media upload form: repeated `files` parts plus uploaderName and optional message",
    ),
    responses(
        (status = 200, description = "Files uploaded successfully", body = ApiResponse<Vec<UploadedFileDto>>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn upload_files(
    State(service): State<Arc<UploadService>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Vec<UploadedFileDto>>>, AppError> {
    let mut files: Vec<IncomingFile> = Vec::new();
    let mut uploader_name = String::new();
    let mut message: Option<String> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "files" => {
                let file_name = field.file_name().unwrap_or("").to_string();

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                files.push(IncomingFile {
                    name: file_name,
                    data: data.to_vec(),
                });
            }
            "uploaderName" => {
                uploader_name = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read uploaderName field: {}", e))
                })?;
            }
            "message" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read message field: {}", e))
                })?;
                if !text.trim().is_empty() {
                    message = Some(text.trim().to_string());
                }
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    let uploaded = service
        .upload_files(&uploader_name, message, files)
        .await?;

    let total = uploaded.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(uploaded),
        Some(format!("{} file(s) uploaded successfully", total)),
        Some(Meta { total }),
    )))
}

/// Serve the raw bytes of a stored file
///
/// No authorization: anyone holding a storage name can fetch the file.
#[utoipa::path(
    get,
    path = "/uploads/{filename}",
    tag = "uploads",
    params(
        ("filename" = String, Path, description = "Generated storage filename")
    ),
    responses(
        (status = 200, description = "Raw file bytes", content_type = "application/octet-stream"),
        (status = 404, description = "File not found")
    )
)]
pub async fn get_file(
    State(service): State<Arc<UploadService>>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let data = service.read_file(&filename).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))
}

#[cfg(test)]
mod tests {
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use std::sync::Arc;
    use tempfile::TempDir;

    use crate::features::uploads::routes;
    use crate::features::uploads::services::UploadService;
    use crate::modules::storage::LocalFileStore;
    use crate::shared::constants::MAX_FILE_SIZE;
    use crate::shared::test_helpers::lazy_test_pool;

    fn test_server(dir: &TempDir) -> TestServer {
        let store = Arc::new(LocalFileStore::new(dir.path().to_path_buf()));
        let service = Arc::new(UploadService::new(lazy_test_pool(), store));
        TestServer::new(routes::routes(service)).unwrap()
    }

    fn jpeg_part(data: Vec<u8>) -> Part {
        Part::bytes(data).file_name("photo.jpg").mime_type("image/jpeg")
    }

    #[tokio::test]
    async fn test_upload_rejects_blank_uploader_name() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let form = MultipartForm::new()
            .add_text("uploaderName", "   ")
            .add_part("files", jpeg_part(vec![1, 2, 3]));

        let res = server.post("/upload").multipart(form).await;
        res.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let form = MultipartForm::new().add_text("uploaderName", "Ayşe");

        let res = server.post("/upload").multipart(form).await;
        res.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let form = MultipartForm::new()
            .add_text("uploaderName", "Ayşe")
            .add_part(
                "files",
                Part::bytes(vec![1, 2, 3])
                    .file_name("doc.pdf")
                    .mime_type("application/pdf"),
            );

        let res = server.post("/upload").multipart(form).await;
        res.assert_status_bad_request();

        // Nothing may reach the file store for a rejected batch
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_upload_rejects_file_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let form = MultipartForm::new()
            .add_text("uploaderName", "Ayşe")
            .add_part(
                "files",
                Part::bytes(vec![1, 2, 3]).file_name("README"),
            );

        let res = server.post("/upload").multipart(form).await;
        res.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let form = MultipartForm::new()
            .add_text("uploaderName", "Ayşe")
            .add_part("files", jpeg_part(vec![0u8; MAX_FILE_SIZE + 1]));

        let res = server.post("/upload").multipart(form).await;
        res.assert_status_bad_request();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_get_file_serves_stored_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("abc123.png"), b"png bytes").unwrap();
        let server = test_server(&dir);

        let res = server.get("/uploads/abc123.png").await;
        res.assert_status_ok();
        assert_eq!(res.header("content-type"), "image/png");
        assert_eq!(res.as_bytes().as_ref(), &b"png bytes"[..]);
    }

    #[tokio::test]
    async fn test_get_file_missing_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let res = server.get("/uploads/nope.jpg").await;
        res.assert_status_not_found();
    }
}
