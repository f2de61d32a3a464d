use super::traits::BookRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book stored as a pretty-printed JSON file.
///
/// Saves go to a sibling `.tmp` file that is then renamed over the target,
/// so an interrupted save never leaves a truncated snapshot behind.
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> StorageResult<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| StorageError::InvalidPath(self.path.display().to_string()))?;

        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

#[async_trait]
impl BookRepository for JsonFileBookRepository {
    async fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            records = book.len(),
            "Loaded address book"
        );
        Ok(book)
    }

    async fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let temp_path = self.temp_path()?;
        let json = serde_json::to_vec_pretty(book)?;

        tokio::fs::write(&temp_path, &json).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        debug!(
            path = %self.path.display(),
            records = book.len(),
            bytes = json.len(),
            "Saved address book"
        );
        Ok(())
    }
}
