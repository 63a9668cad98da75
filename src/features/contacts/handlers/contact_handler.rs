use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::contacts::dtos::{ContactReceivedDto, SubmitContactDto};
use crate::features::contacts::services::ContactService;
use crate::shared::types::ApiResponse;

/// Submit a contact-form message
///
/// Public endpoint; accepts application/x-www-form-urlencoded bodies.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contacts",
    request_body(
        content = SubmitContactDto,
        content_type = "application/x-www-form-urlencoded",
    ),
    responses(
        (status = 200, description = "Message stored", body = ApiResponse<ContactReceivedDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    AppForm(dto): AppForm<SubmitContactDto>,
) -> Result<Json<ApiResponse<ContactReceivedDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.submit(dto).await?;

    Ok(Json(ApiResponse::success(
        Some(ContactReceivedDto { received: true }),
        Some("Your message has been sent".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use std::sync::Arc;

    use crate::features::contacts::routes;
    use crate::features::contacts::services::ContactService;
    use crate::shared::test_helpers::lazy_test_pool;

    fn test_server() -> TestServer {
        let service = Arc::new(ContactService::new(lazy_test_pool()));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_contact_rejects_empty_fields() {
        let server = test_server();

        let res = server
            .post("/contact")
            .form(&[("name", "Ayşe"), ("email", ""), ("message", "hello")])
            .await;
        res.assert_status_bad_request();

        let res = server
            .post("/contact")
            .form(&[("name", "  "), ("email", "a@b.c"), ("message", "hello")])
            .await;
        res.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_contact_rejects_implausible_email() {
        let server = test_server();

        let res = server
            .post("/contact")
            .form(&[
                ("name", "Ayşe"),
                ("email", "not-an-email"),
                ("message", "hello"),
            ])
            .await;
        res.assert_status_bad_request();
    }
}
