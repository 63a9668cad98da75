use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::gallery::handlers;
use crate::features::gallery::services::GalleryService;

/// Create routes for the gallery feature
pub fn routes(service: Arc<GalleryService>) -> Router {
    Router::new()
        .route("/gallery", get(handlers::list_gallery))
        .with_state(service)
}
