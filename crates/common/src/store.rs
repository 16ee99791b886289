use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::document::Document;

/**
 * Document Store
 * ==============
 * Every document is a regular file directly under `root`,
 *  keyed by its filename. There is no index and no locking:
 *  the directory listing *is* the set of documents, and
 *  concurrent writers to the same name race with the last
 *  completed write winning.
 *
 * Names are used as single path components only. Anything
 *  that could resolve outside `root` is refused with
 *  `StoreError::InvalidName` before touching the disk.
 */
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Open the store at `root`, creating the directory if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        tracing::debug!(root = %root.display(), "document store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All documents in directory enumeration order.
    ///  Subdirectories and non utf-8 names are skipped.
    pub async fn ls(&self) -> Result<Vec<Document>, StoreError> {
        let mut entries = fs::read_dir(&self.root).await?;
        let mut documents = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(name = ?raw, "skipping document with non utf-8 name");
                    continue;
                }
            };

            documents.push(Document {
                name,
                modified: metadata.modified()?,
            });
        }

        Ok(documents)
    }

    /// Just the names, in enumeration order
    pub async fn names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.ls().await?.into_iter().map(|doc| doc.name).collect())
    }

    /// Whether `name` is a document in the store. Invalid names are never present.
    pub async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let path = match self.path_for(name) {
            Ok(path) => path,
            Err(_) => return Ok(false),
        };

        match fs::metadata(&path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw content of `name`
    pub async fn cat(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(name)?;
        fs::read(&path).await.map_err(|e| not_found_or(e, name))
    }

    /// Replace the content of `name`, creating it if it does not exist
    pub async fn write(&self, name: &str, content: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(name)?;
        fs::write(&path, content).await?;
        tracing::debug!(name, bytes = content.len(), "document written");
        Ok(())
    }

    /// Rename `from` to `to`. An existing `to` is replaced.
    pub async fn mv(&self, from: &str, to: &str) -> Result<(), StoreError> {
        let from_path = self.path_for(from)?;
        let to_path = self.path_for(to)?;
        fs::rename(&from_path, &to_path)
            .await
            .map_err(|e| not_found_or(e, from))?;
        tracing::debug!(from, to, "document renamed");
        Ok(())
    }

    /// Copy the bytes of `from` into `to`. An existing `to` is overwritten.
    pub async fn cp(&self, from: &str, to: &str) -> Result<(), StoreError> {
        let from_path = self.path_for(from)?;
        let to_path = self.path_for(to)?;
        let bytes = fs::copy(&from_path, &to_path)
            .await
            .map_err(|e| not_found_or(e, from))?;
        tracing::debug!(from, to, bytes, "document copied");
        Ok(())
    }

    /// Remove `name`. Returns whether there was anything to remove.
    pub async fn rm(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(name, "document removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        if !is_plain_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

/// A name that stays a single component under the store root
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

fn not_found_or(e: std::io::Error, name: &str) -> StoreError {
    if e.kind() == ErrorKind::NotFound {
        StoreError::NotFound(name.to_string())
    } else {
        StoreError::Io(e)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid document name: {0:?}")]
    InvalidName(String),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
