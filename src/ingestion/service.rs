//! Ingestion Service
//!
//! Orchestrates the write path: acquires a text stream from one of the three
//! source kinds, runs every line through the tokenizer, lowercases each token
//! and feeds it to the ranked index. When persist-on-write is enabled
//! (the default) a successful ingest triggers a full synchronous snapshot
//! before the call returns, trading write throughput for durability.
//!
//! Ingestion is not transactional across lines: increments applied before a
//! mid-stream I/O failure stay in the index. The caller decides whether to
//! retry; the service never retries on its own.

use super::tokenizer::tokenize_line;
use super::types::{IngestStats, SourceKind};
use crate::error::Result;
use crate::ranking::index::RankedIndex;
use crate::snapshot::store::SnapshotStore;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub struct IngestionService {
    index: Arc<RankedIndex>,
    snapshots: Arc<SnapshotStore>,
    persist_on_write: bool,
    http_client: reqwest::Client,
}

impl IngestionService {
    pub fn new(
        index: Arc<RankedIndex>,
        snapshots: Arc<SnapshotStore>,
        persist_on_write: bool,
    ) -> Self {
        Self {
            index,
            snapshots,
            persist_on_write,
            http_client: reqwest::Client::new(),
        }
    }

    /// Entry point for posting new words.
    ///
    /// The kind string is resolved into a [`SourceKind`] before any data is
    /// read, so an unrecognized kind fails with the index untouched.
    pub async fn ingest(&self, kind: &str, data: &str) -> Result<IngestStats> {
        let source = SourceKind::parse(kind, data)?;

        let stats = match source {
            SourceKind::Inline(text) => self.index_text(text),
            SourceKind::File(path) => self.ingest_file(path).await?,
            SourceKind::Remote(url) => self.ingest_remote(url).await?,
        };
        tracing::info!(
            "Indexed {} words from {} lines",
            stats.words_indexed,
            stats.lines_read
        );

        if self.persist_on_write {
            self.save_snapshot()?;
        }
        Ok(stats)
    }

    /// Reads a local file line by line. No existence pre-check: failures to
    /// open propagate as I/O errors.
    async fn ingest_file(&self, path: &str) -> Result<IngestStats> {
        let file = tokio::fs::File::open(path).await?;
        let mut lines = BufReader::new(file).lines();

        let mut stats = IngestStats::default();
        while let Some(line) = lines.next_line().await? {
            stats.lines_read += 1;
            stats.words_indexed += self.index_line(&line);
        }
        Ok(stats)
    }

    /// Fetches whatever the URL serves and indexes it as text.
    ///
    /// The HTTP status is deliberately not checked: a non-text resource or an
    /// error page is counted like any other content, markup included.
    async fn ingest_remote(&self, url: &str) -> Result<IngestStats> {
        let response = self.http_client.get(url).send().await?;
        let body = response.text().await?;
        Ok(self.index_text(&body))
    }

    fn index_text(&self, text: &str) -> IngestStats {
        let mut stats = IngestStats::default();
        for line in text.lines() {
            stats.lines_read += 1;
            stats.words_indexed += self.index_line(line);
        }
        stats
    }

    fn index_line(&self, line: &str) -> usize {
        let tokens = tokenize_line(line);
        let indexed = tokens.len();
        for token in tokens {
            self.index.increment(&token.to_lowercase());
        }
        indexed
    }

    /// Writes the full sorted sequence to disk. Saving an empty index is a
    /// no-op inside the store, so a fresh or reset index never clobbers a
    /// previously persisted state file.
    pub fn save_snapshot(&self) -> Result<()> {
        let entries = self.index.snapshot();
        self.snapshots.save(&entries)
    }

    /// Clears all in-memory state and removes the persisted snapshot file if
    /// present.
    pub fn reset(&self) -> Result<()> {
        self.index.reset();
        self.snapshots.remove()?;
        tracing::info!("Index and persisted state cleared");
        Ok(())
    }
}
