use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::contacts::models::Contact;
use crate::features::uploads::models::Upload;

/// Full upload record as shown in the admin panel
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminUploadDto {
    pub id: i64,
    pub uploader_name: String,
    pub filename: String,
    pub original_filename: String,
    pub file_type: String,
    pub file_size: i64,
    pub message: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub is_approved: bool,
}

impl From<Upload> for AdminUploadDto {
    fn from(u: Upload) -> Self {
        Self {
            id: u.id,
            uploader_name: u.uploader_name,
            filename: u.filename,
            original_filename: u.original_filename,
            file_type: u.file_type,
            file_size: u.file_size,
            message: u.message,
            upload_date: u.upload_date,
            is_approved: u.is_approved,
        }
    }
}

/// Full contact record as shown in the admin panel
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminContactDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_date: DateTime<Utc>,
    pub is_read: bool,
}

impl From<Contact> for AdminContactDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            message: c.message,
            created_date: c.created_date,
            is_read: c.is_read,
        }
    }
}

/// Response DTO confirming an approval
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApprovedResponseDto {
    /// Confirmation that the upload is approved
    pub approved: bool,
}

/// Aggregate counters over all uploads
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UploadStatsDto {
    pub total_uploads: i64,
    pub approved_uploads: i64,
    pub pending_uploads: i64,
    pub image_count: i64,
    pub video_count: i64,
    pub total_size_bytes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // `is_read` exists on contacts but no endpoint ever sets it; this
    // pins the pass-through so the dead field stays visible.
    #[test]
    fn test_contact_is_read_defaults_to_false() {
        let contact = Contact {
            id: 1,
            name: "Ayşe".to_string(),
            email: "ayse@example.com".to_string(),
            message: "hello".to_string(),
            created_date: Utc::now(),
            is_read: false,
        };

        let dto = AdminContactDto::from(contact);
        assert!(!dto.is_read);
    }
}
