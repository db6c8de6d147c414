use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Files on the local disk, relative to a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    /// Truncates any existing file.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        self.resolve(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TranslatorError;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        tokio_test::block_on(async {
            storage.write_file("nested/out.properties", b"a=1\nb=2\n").await.unwrap();
            storage.write_file("nested/out.properties", b"c=3\n").await.unwrap();

            let data = storage.read_file("nested/out.properties").await.unwrap();
            assert_eq!(data, b"c=3\n");
        });
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        let err = storage.read_file("missing.properties").await.unwrap_err();
        assert!(matches!(err, TranslatorError::IoError(_)));
    }

    #[test]
    fn test_location_joins_base_path() {
        let storage = LocalStorage::new("/tmp/resources".to_string());
        assert_eq!(
            Path::new(&storage.location("out.properties")),
            Path::new("/tmp/resources/out.properties")
        );
    }
}
