use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::moderation::handlers;
use crate::features::moderation::services::ModerationService;

/// Create routes for the moderation feature.
///
/// These routes carry no authentication; deploy behind a private
/// network or an auth proxy.
pub fn routes(service: Arc<ModerationService>) -> Router {
    Router::new()
        .route("/admin/uploads", get(handlers::list_uploads))
        .route("/admin/contacts", get(handlers::list_contacts))
        .route(
            "/admin/uploads/{id}/approve",
            post(handlers::approve_upload),
        )
        .route("/admin/stats", get(handlers::upload_stats))
        .with_state(service)
}
