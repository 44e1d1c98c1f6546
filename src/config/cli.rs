use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Export sink rooted at the configured output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_file_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("reports");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        let written = storage.write_file("plan.txt", b"Day 1").await.unwrap();

        assert!(written.ends_with("plan.txt"));
        assert_eq!(std::fs::read_to_string(base.join("plan.txt")).unwrap(), "Day 1");
    }
}
