//! JSON-lines mood event log file.
//!
//! Events are appended as one JSON object per line to a single log file
//! under the configured data directory. Appends are serialized through a
//! mutex and written as whole lines, so concurrent requests never interleave
//! partial records.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::info;

use super::{sort_by_timestamp, MoodEvent, MoodEventStore, StoreError};

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "mood_log.jsonl";

/// Durable file-backed event store.
#[derive(Debug)]
pub struct FileEventStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileEventStore {
    /// Open (or create) the log under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create data directory: {e}"))
        })?;

        let path = data_dir.join(LOG_FILE);
        info!(?path, "Using mood event log file");

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing log file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl MoodEventStore for FileEventStore {
    async fn append(&self, event: MoodEvent) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&event)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to open log: {e}")))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to append event: {e}")))?;
        file.flush()
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to flush log: {e}")))?;

        Ok(())
    }

    async fn read_all(&self, user_id: &str) -> Result<Vec<MoodEvent>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Unavailable(format!("Failed to read log: {e}")));
            }
        };

        let mut log = Vec::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let event: MoodEvent = serde_json::from_str(line)
                .map_err(|e| StoreError::Serialization(format!("Corrupt log line: {e}")))?;
            if event.user_id == user_id {
                log.push(event);
            }
        }

        sort_by_timestamp(&mut log);
        Ok(log)
    }
}
