use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::shared::constants::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};

/// Database model for uploaded media
#[derive(Debug, Clone, FromRow)]
pub struct Upload {
    pub id: i64,
    pub uploader_name: String,
    /// Generated storage name, unique on disk
    pub filename: String,
    /// Sanitized client-supplied name
    pub original_filename: String,
    pub file_type: String,
    pub file_size: i64,
    pub message: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub is_approved: bool,
}

/// Media kind derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Other,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Video
        } else {
            FileKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Video => "video",
            FileKind::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_map_to_image() {
        for ext in ["png", "jpg", "jpeg", "gif", "PNG", "Jpg"] {
            assert_eq!(FileKind::from_extension(ext), FileKind::Image, "{}", ext);
        }
    }

    #[test]
    fn test_video_extensions_map_to_video() {
        for ext in ["mp4", "mov", "avi", "mkv", "webm", "MP4"] {
            assert_eq!(FileKind::from_extension(ext), FileKind::Video, "{}", ext);
        }
    }

    #[test]
    fn test_unknown_extensions_map_to_other() {
        for ext in ["pdf", "exe", "txt", ""] {
            assert_eq!(FileKind::from_extension(ext), FileKind::Other, "{}", ext);
        }
    }
}
