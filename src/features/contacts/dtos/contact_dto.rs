use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for the contact form (application/x-www-form-urlencoded)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitContactDto {
    /// Name of the sender (required)
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: String,

    /// Email address for replies (required)
    #[validate(length(max = 120, message = "Email must not exceed 120 characters"))]
    pub email: String,

    /// The message text (required)
    pub message: String,
}

/// Response DTO confirming a stored contact message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactReceivedDto {
    /// Confirmation that the message was stored
    pub received: bool,
}
