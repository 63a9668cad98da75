use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Public gallery entry.
///
/// Only the fields needed to render the gallery are exposed;
/// original_filename, message, file_size and the moderation flag stay
/// private.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GalleryEntryDto {
    pub id: i64,
    /// Storage name, usable against `/uploads/{filename}`
    pub filename: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub uploader_name: String,
    pub upload_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_gallery_entry_public_projection() {
        let entry = GalleryEntryDto {
            id: 7,
            filename: "3f8a2b9c0d1e4f56789a0b1c2d3e4f50.jpg".to_string(),
            file_type: "image".to_string(),
            uploader_name: "Ayşe".to_string(),
            upload_date: Utc::now(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["type"], "image");
        assert_eq!(
            obj.keys().collect::<Vec<_>>().len(),
            5,
            "gallery entries expose exactly five fields"
        );
        assert!(!obj.contains_key("original_filename"));
        assert!(!obj.contains_key("message"));
        assert!(!obj.contains_key("file_size"));
        assert!(!obj.contains_key("is_approved"));
    }
}
