use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters stripped out of client-supplied filenames.
    /// Anything outside [A-Za-z0-9._-] collapses to a single underscore.
    static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
}

/// Sanitize a client-supplied filename for storage as `original_filename`.
///
/// Strips path components (both separator styles), collapses unsafe
/// characters to underscores, and trims leading dots and underscores so
/// the result can never name a hidden file or escape the upload
/// directory.
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw);

    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(base, "_");
    let cleaned = cleaned.trim_start_matches(['.', '_']).trim_end_matches('_');

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Minimal syntactic email check: must contain both '@' and '.'.
/// Intentionally not RFC-compliant.
pub fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_simple_names() {
        assert_eq!(sanitize_filename("photo.jpg"), "photo.jpg");
        assert_eq!(sanitize_filename("My_Wedding-01.PNG"), "My_Wedding-01.PNG");
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("/etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\evil.exe"), "evil.exe");
        assert_eq!(sanitize_filename("a/b/c/photo.jpg"), "photo.jpg");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("düğün fotoğrafı.jpg"), "d_n_foto_raf_.jpg");
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo_1_.jpg");
    }

    #[test]
    fn test_sanitize_trims_leading_dots() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename("...jpg"), "jpg");
    }

    #[test]
    fn test_sanitize_never_returns_empty() {
        assert_eq!(sanitize_filename(""), "file");
        assert_eq!(sanitize_filename("///"), "file");
        assert_eq!(sanitize_filename("..."), "file");
    }

    #[test]
    fn test_email_check_valid() {
        assert!(is_plausible_email("ayse@example.com"));
        assert!(is_plausible_email("a.b@c"));
    }

    #[test]
    fn test_email_check_invalid() {
        assert!(!is_plausible_email("not-an-email"));
        assert!(!is_plausible_email("missing-dot@example"));
        assert!(!is_plausible_email("missing.at.example.com"));
        assert!(!is_plausible_email(""));
    }
}
