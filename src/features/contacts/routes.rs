use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Create routes for the contacts feature
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contact", post(handlers::submit_contact))
        .with_state(service)
}
