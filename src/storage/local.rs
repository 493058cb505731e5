//! Local filesystem sink.
//!
//! The output file is opened once in append mode and grows monotonically;
//! existing content from earlier runs is never rewritten.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::EnrichedClub;
use crate::storage::ResultSink;

/// Append-only JSON file sink.
pub struct LocalSink {
    path: PathBuf,
    file: File,
}

impl LocalSink {
    /// Open (or create) the sink file for appending.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::sink(&path, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| AppError::sink(&path, e))?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append any serializable value as compact JSON, without separator.
    pub async fn append_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.file
            .write_all(&bytes)
            .await
            .map_err(|e| AppError::sink(&self.path, e))?;
        self.file
            .flush()
            .await
            .map_err(|e| AppError::sink(&self.path, e))?;
        Ok(())
    }

    /// Read every batch back from a sink file.
    ///
    /// A missing file yields no batches.
    pub async fn load_batches<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<Vec<T>>> {
        let bytes = match tokio::fs::read(path.as_ref()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No sink found at {}", path.as_ref().display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<Vec<T>>()
            .map(|batch| batch.map_err(AppError::from))
            .collect()
    }
}

#[async_trait]
impl ResultSink for LocalSink {
    async fn append_batch(&mut self, batch: &[EnrichedClub]) -> Result<()> {
        self.append_json(batch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_batches_are_concatenated_not_merged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clubs.json");

        let mut sink = LocalSink::open(&path).await.unwrap();
        sink.append_json(&json!([{"id": 1}])).await.unwrap();
        sink.append_json(&json!([{"id": 2}])).await.unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"[{"id":1}][{"id":2}]"#);
    }

    #[tokio::test]
    async fn test_reopen_appends_after_existing_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clubs.json");
        std::fs::write(&path, "[]").unwrap();

        let mut sink = LocalSink::open(&path).await.unwrap();
        sink.append_batch(&[]).await.unwrap();
        sink.append_json(&json!([{"id": 3}])).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"[][][{"id":3}]"#);
    }

    #[tokio::test]
    async fn test_open_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/clubs.json");

        let sink = LocalSink::open(&path).await.unwrap();
        assert_eq!(sink.path(), path.as_path());
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_open_directory_is_sink_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalSink::open(tmp.path()).await.err().unwrap();
        assert!(matches!(err, AppError::SinkWrite { .. }));
    }

    #[tokio::test]
    async fn test_load_batches_reads_concatenated_arrays() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clubs.json");
        std::fs::write(&path, r#"[{"id":1}][][{"id":2},{"id":3}]"#).unwrap();

        let batches: Vec<Vec<Value>> = LocalSink::load_batches(&path).await.unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches.iter().map(Vec::len).collect::<Vec<_>>(), [1, 0, 2]);
        assert_eq!(batches[2][1]["id"], 3);
    }

    #[tokio::test]
    async fn test_load_batches_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let batches: Vec<Vec<Value>> = LocalSink::load_batches(tmp.path().join("nope.json"))
            .await
            .unwrap();
        assert!(batches.is_empty());
    }
}
