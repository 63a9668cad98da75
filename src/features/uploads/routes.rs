use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::uploads::handlers::{get_file, upload_files};
use crate::features::uploads::services::UploadService;

/// Create routes for the uploads feature
pub fn routes(upload_service: Arc<UploadService>) -> Router {
    Router::new()
        .route(
            "/upload",
            // The per-file size cap inside the service is the only bound;
            // a whole batch may legitimately exceed any single-file limit.
            post(upload_files).layer(DefaultBodyLimit::disable()),
        )
        .route("/uploads/{filename}", get(get_file))
        .with_state(upload_service)
}
