// =============================================================================
// UPLOAD CONSTANTS
// =============================================================================

/// File extensions accepted by the upload endpoint (lowercase)
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "mp4", "mov", "avi", "mkv", "webm",
];

/// Extensions stored with file_type = "image"
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Extensions stored with file_type = "video"
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Maximum size of a single uploaded file in bytes (50 MiB)
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;
