use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::SubmitContactDto;
use crate::features::contacts::models::Contact;
use crate::shared::validation::is_plausible_email;

/// Service for contact-form intake
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist one contact-form submission.
    ///
    /// All three fields are required after trimming; the email only has
    /// to look like one ('@' and '.' present).
    pub async fn submit(&self, dto: SubmitContactDto) -> Result<Contact> {
        let name = dto.name.trim();
        let email = dto.email.trim();
        let message = dto.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(AppError::Validation("All fields are required".to_string()));
        }

        if !is_plausible_email(email) {
            return Err(AppError::Validation(
                "Please provide a valid email address".to_string(),
            ));
        }

        let contact = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_date, is_read
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert contact: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Contact message stored: id={}", contact.id);

        Ok(contact)
    }
}
