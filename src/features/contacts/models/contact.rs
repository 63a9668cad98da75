use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for contact-form messages
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_date: DateTime<Utc>,
    /// Defined in the schema but never set by any endpoint; a "mark as
    /// read" admin action was planned and not built.
    pub is_read: bool,
}
