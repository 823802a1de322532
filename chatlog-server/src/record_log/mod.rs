//! Append-only record file.
//!
//! [`RecordLog`] formats each [`ChatRecord`] with [`format::render_block`] and
//! appends it to a flat UTF-8 text file. The file is opened and closed on every
//! call; no handle is held between requests. Appends issued through one
//! `RecordLog` are serialized, so blocks from concurrent requests never
//! interleave. Writers in other processes are not coordinated.

pub mod format;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::schemas::record::ChatRecord;

#[derive(Debug)]
pub struct RecordLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl RecordLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory holding the record file exists and is not
    /// read-only. Says nothing about the file itself, which may not exist yet.
    pub async fn directory_writable(&self) -> bool {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        match tokio::fs::metadata(dir).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }

    /// Append one formatted block for `record` and return its length in bytes.
    ///
    /// The file is created if missing (its directory is not). The block is
    /// handed to the OS in a single `write_all`, then flushed and synced
    /// before this returns. On error nothing is retried.
    pub async fn append(&self, record: &ChatRecord) -> io::Result<usize> {
        let block = format::render_block(record);
        let path = self.path.clone();
        let lock = Arc::clone(&self.write_lock);

        // Held on the blocking thread: the guard must outlive the write even
        // if the request future is dropped.
        let written = tokio::task::spawn_blocking(move || {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            append_block(&path, &block)
        })
        .await
        .map_err(io::Error::other)??;

        debug!(path = %self.path.display(), bytes = written, "record block appended");
        Ok(written)
    }
}

fn append_block(path: &Path, block: &str) -> io::Result<usize> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(block.as_bytes())?;
    file.flush()?;
    file.sync_data()?;
    Ok(block.len())
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    fn record(chat_id: i64) -> ChatRecord {
        ChatRecord {
            timestamp: "2024-01-01T00:00:00".into(),
            chat_id,
            user_message: "hi".into(),
            bot_reasoning: "greet user".into(),
            bot_response: "hello".into(),
            thinking_time: "0.5".into(),
        }
    }

    #[tokio::test]
    async fn creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");
        let log = RecordLog::new(&path);

        let written = log.append(&record(1)).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.len(), written);
        assert_eq!(contents, format::render_block(&record(1)));
    }

    #[tokio::test]
    async fn appends_without_overwriting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");
        std::fs::write(&path, "existing line\n").unwrap();
        let log = RecordLog::new(&path);

        log.append(&record(1)).await.unwrap();
        log.append(&record(2)).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing line\n"));
        let first = contents.find("对话ID: 1\n").unwrap();
        let second = contents.find("对话ID: 2\n").unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn identical_records_are_not_deduplicated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");
        let log = RecordLog::new(&path);

        log.append(&record(5)).await.unwrap();
        log.append(&record(5)).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("=== 对话记录 ===").count(), 2);
    }

    #[tokio::test]
    async fn missing_directory_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("record.txt");
        let log = RecordLog::new(&path);

        let err = log.append(&record(1)).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn directory_as_target_is_reported() {
        let dir = tempdir().unwrap();
        let log = RecordLog::new(dir.path());

        assert!(log.append(&record(1)).await.is_err());
    }

    #[tokio::test]
    async fn directory_writable_checks_parent_only() {
        let dir = tempdir().unwrap();
        assert!(RecordLog::new(dir.path().join("record.txt")).directory_writable().await);
        assert!(
            !RecordLog::new(dir.path().join("missing").join("record.txt"))
                .directory_writable()
                .await
        );
    }

    #[tokio::test]
    async fn concurrent_appends_keep_blocks_intact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");
        let log = Arc::new(RecordLog::new(&path));

        let mut tasks = tokio::task::JoinSet::new();
        for id in 0..32 {
            let log = Arc::clone(&log);
            let mut rec = record(id);
            rec.bot_reasoning = "x".repeat(8 * 1024);
            tasks.spawn(async move { log.append(&rec).await });
        }
        while let Some(res) = tasks.join_next().await {
            res.unwrap().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let blocks: Vec<&str> = contents
            .split("\n=== 对话记录 ===\n")
            .filter(|b| !b.is_empty())
            .collect();
        assert_eq!(blocks.len(), 32);
        for block in blocks {
            assert!(block.starts_with("时间: "));
            assert!(block.ends_with("思考用时: 0.5秒\n===============\n"));
        }
    }
}
