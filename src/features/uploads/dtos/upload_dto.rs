use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::ALLOWED_EXTENSIONS;

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadBatchDto {
    /// The files to upload (repeat the field for each file)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: String,
    /// Name of the person uploading (required)
    #[schema(example = "Ayşe")]
    pub uploader_name: String,
    /// Optional message attached to every file in the batch
    pub message: Option<String>,
}

/// One file taken from the multipart body, not yet validated
pub struct IncomingFile {
    /// Client-supplied filename, may be empty
    pub name: String,
    pub data: Vec<u8>,
}

/// Per-file summary returned after a successful upload batch
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    /// Sanitized original filename
    pub original_filename: String,
    /// Size of the file in bytes
    pub size: i64,
}

/// Case-insensitive extension: the substring after the last '.'.
/// Returns None for names without a dot.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

pub fn is_extension_allowed(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext)
}

/// Random 128-bit hex identifier plus the original extension. The
/// identifier space makes collisions with existing stored files
/// negligible; no explicit collision check is performed.
pub fn generate_storage_filename(ext: &str) -> String {
    format!("{}.{}", Uuid::new_v4().simple(), ext)
}

/// Content type served for a stored filename, from its extension
pub fn content_type_for(filename: &str) -> &'static str {
    match extension_of(filename).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_extension_of_lowercases() {
        assert_eq!(extension_of("photo.JPG"), Some("jpg".to_string()));
        assert_eq!(extension_of("clip.Mp4"), Some("mp4".to_string()));
    }

    #[test]
    fn test_extension_of_takes_last_dot() {
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("name."), Some("".to_string()));
    }

    #[test]
    fn test_extension_of_no_dot() {
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(""), None);
    }

    #[test]
    fn test_allow_list() {
        for ext in ["png", "jpg", "jpeg", "gif", "mp4", "mov", "avi", "mkv", "webm"] {
            assert!(is_extension_allowed(ext), "{}", ext);
        }
        for ext in ["pdf", "exe", "svg", "heic", ""] {
            assert!(!is_extension_allowed(ext), "{}", ext);
        }
    }

    #[test]
    fn test_generated_names_are_unique() {
        let names: HashSet<String> = (0..10_000)
            .map(|_| generate_storage_filename("jpg"))
            .collect();
        assert_eq!(names.len(), 10_000);
    }

    #[test]
    fn test_generated_name_shape() {
        let name = generate_storage_filename("png");
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "png");
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.JPEG"), "image/jpeg");
        assert_eq!(content_type_for("a.webm"), "video/webm");
        assert_eq!(content_type_for("a.bin"), "application/octet-stream");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
