//! Local filesystem blob store.
//!
//! Files are stored flat under a single root directory, one file per
//! upload, named by the generated storage name (`<128-bit-hex>.<ext>`).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::error::{AppError, Result};

/// Filesystem store for uploaded binary content
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet
    pub async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Internal(format!(
                "Failed to create upload directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// A stored name must be a bare filename: no separators, no parent
    /// components. Generated names always satisfy this; client-supplied
    /// lookups must be checked before touching the filesystem.
    pub fn is_safe_name(name: &str) -> bool {
        !name.is_empty()
            && !name.contains('/')
            && !name.contains('\\')
            && !name.contains("..")
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        if !Self::is_safe_name(name) {
            return Err(AppError::NotFound("File not found".to_string()));
        }
        Ok(self.root.join(name))
    }

    /// Write a blob under the given storage name
    pub async fn save(&self, name: &str, data: &[u8]) -> Result<()> {
        let path = self.resolve(name)?;
        tokio::fs::write(&path, data).await.map_err(|e| {
            tracing::error!("Failed to write file {}: {}", path.display(), e);
            AppError::Internal(format!("Failed to store file {}", name))
        })
    }

    /// Read a previously stored blob
    pub async fn read(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve(name)?;
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::NotFound("File not found".to_string()),
            _ => {
                tracing::error!("Failed to read file {}: {}", path.display(), e);
                AppError::Internal(format!("Failed to read file {}", name))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_name_accepts_generated_names() {
        assert!(LocalFileStore::is_safe_name(
            "3f8a2b9c0d1e4f56789a0b1c2d3e4f50.jpg"
        ));
        assert!(LocalFileStore::is_safe_name("photo.png"));
    }

    #[test]
    fn test_safe_name_rejects_traversal() {
        assert!(!LocalFileStore::is_safe_name(""));
        assert!(!LocalFileStore::is_safe_name("../secrets.txt"));
        assert!(!LocalFileStore::is_safe_name("a/b.jpg"));
        assert!(!LocalFileStore::is_safe_name("a\\b.jpg"));
        assert!(!LocalFileStore::is_safe_name(".."));
    }

    #[tokio::test]
    async fn test_save_and_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().to_path_buf());

        store.save("abc123.jpg", b"jpeg bytes").await.unwrap();
        let data = store.read("abc123.jpg").await.unwrap();
        assert_eq!(data, b"jpeg bytes");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().to_path_buf());

        let err = store.read("missing.png").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_read_traversal_name_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().to_path_buf());

        let err = store.read("../../etc/passwd").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_ensure_root_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("uploads");
        let store = LocalFileStore::new(root.clone());

        store.ensure_root().await.unwrap();
        assert!(root.is_dir());
    }
}
