//! Ingestion Module Tests
//!
//! Validates the tokenizer, the source kind dispatch, and the ingestion
//! pipeline end to end against an in-memory index.
//!
//! ## Test Scopes
//! - **Tokenizer**: Hyphen handling, separator collapsing, and the absence
//!   of filtering or case folding.
//! - **SourceKind**: Boundary dispatch of the wire-level kind string.
//! - **Service**: Inline and file ingestion, normalization, persistence
//!   toggling, and failure behavior.
//!
//! *Note: Remote (URL) ingestion needs a live endpoint and is exercised in
//! integration environments; unit tests cover the shared text path it feeds.*

#[cfg(test)]
mod tests {
    use crate::error::WordRankError;
    use crate::ingestion::service::IngestionService;
    use crate::ingestion::tokenizer::tokenize_line;
    use crate::ingestion::types::{IngestResponse, PostWordsRequest, SourceKind};
    use crate::ranking::index::RankedIndex;
    use crate::snapshot::store::SnapshotStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn service_in(
        dir: &TempDir,
        persist_on_write: bool,
    ) -> (Arc<RankedIndex>, Arc<SnapshotStore>, IngestionService) {
        let index = Arc::new(RankedIndex::new());
        let snapshots = Arc::new(SnapshotStore::new(dir.path().join("state.txt")));
        let service = IngestionService::new(index.clone(), snapshots.clone(), persist_on_write);
        (index, snapshots, service)
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        let tokens = tokenize_line("some data data");
        assert_eq!(tokens, vec!["some", "data", "data"]);
    }

    #[test]
    fn test_tokenize_hyphen_becomes_separator() {
        let tokens = tokenize_line("tel-aviv");
        assert_eq!(tokens, vec!["tel", "aviv"]);

        let tokens = tokenize_line("mid-word-clean-up-up");
        assert_eq!(tokens, vec!["mid", "word", "clean", "up", "up"]);
    }

    #[test]
    fn test_tokenize_collapses_consecutive_separators() {
        let tokens = tokenize_line("a  -  b");
        assert_eq!(tokens, vec!["a", "b"]);

        let tokens = tokenize_line("--x--");
        assert_eq!(tokens, vec!["x"]);
    }

    #[test]
    fn test_tokenize_keeps_punctuation_and_digits() {
        // No alphabetic filtering: tokens pass through verbatim
        let tokens = tokenize_line("data, (who?), hi1 2024");
        assert_eq!(tokens, vec!["data,", "(who?),", "hi1", "2024"]);
    }

    #[test]
    fn test_tokenize_does_not_fold_case() {
        let tokens = tokenize_line("Hello WORLD");
        assert_eq!(tokens, vec!["Hello", "WORLD"]);
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize_line("").is_empty());
        assert!(tokenize_line("   ").is_empty());
        assert!(tokenize_line("---").is_empty());
    }

    // ============================================================
    // SOURCE KIND TESTS
    // ============================================================

    #[test]
    fn test_source_kind_dispatch() {
        assert_eq!(
            SourceKind::parse("string", "abc").unwrap(),
            SourceKind::Inline("abc")
        );
        assert_eq!(
            SourceKind::parse("file", "/tmp/x").unwrap(),
            SourceKind::File("/tmp/x")
        );
        assert_eq!(
            SourceKind::parse("url", "http://host/x").unwrap(),
            SourceKind::Remote("http://host/x")
        );
    }

    #[test]
    fn test_source_kind_rejects_unknown() {
        assert!(matches!(
            SourceKind::parse("xml", "whatever"),
            Err(WordRankError::UnrecognizedInputKind(_))
        ));
    }

    // ============================================================
    // SERVICE TESTS - inline ingestion
    // ============================================================

    #[tokio::test]
    async fn test_ingest_inline_counts_words() {
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, false);

        let stats = service.ingest("string", "some data data").await.unwrap();

        assert_eq!(stats.lines_read, 1);
        assert_eq!(stats.words_indexed, 3);
        assert_eq!(index.len(), 2);
        assert_eq!(index.count_of("data"), Some(2));
        assert_eq!(index.rank_at(1), Some("data".to_string()));
    }

    #[tokio::test]
    async fn test_ingest_lowercases_before_counting() {
        // Scenario: "Hi1 You YOU" -> "you" ranks first, then "hi1"
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, false);

        service.ingest("string", "Hi1 You YOU").await.unwrap();

        assert_eq!(index.count_of("you"), Some(2));
        assert_eq!(index.count_of("hi1"), Some(1));
        assert_eq!(index.rank_at(1), Some("you".to_string()));
        assert_eq!(index.rank_at(2), Some("hi1".to_string()));
    }

    #[tokio::test]
    async fn test_ingest_splits_hyphenated_words() {
        // Scenario: "mid-word-clean-up-up" -> "up" twice, the rest once
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, false);

        service.ingest("string", "mid-word-clean-up-up").await.unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(index.rank_at(1), Some("up".to_string()));
        assert_eq!(index.rank_at(2), Some("clean".to_string()));
    }

    #[tokio::test]
    async fn test_ingest_handles_multiline_input() {
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, false);

        let stats = service
            .ingest("string", "first line\nsecond line\n")
            .await
            .unwrap();

        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.words_indexed, 4);
        assert_eq!(index.count_of("line"), Some(2));
    }

    #[tokio::test]
    async fn test_ingest_unknown_kind_leaves_index_unchanged() {
        // Scenario: kind "xml" fails before any data is read
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, true);

        let result = service.ingest("xml", "some data data").await;

        assert!(matches!(
            result,
            Err(WordRankError::UnrecognizedInputKind(_))
        ));
        assert!(index.is_empty());
        assert!(!dir.path().join("state.txt").exists());
    }

    // ============================================================
    // SERVICE TESTS - file ingestion
    // ============================================================

    #[tokio::test]
    async fn test_ingest_file_reads_line_by_line() {
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, false);

        let input = dir.path().join("input.txt");
        std::fs::write(&input, "tel-aviv\nHello hello\n").unwrap();

        let stats = service
            .ingest("file", input.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(stats.lines_read, 2);
        assert_eq!(stats.words_indexed, 4);
        assert_eq!(index.count_of("hello"), Some(2));
        assert_eq!(index.count_of("tel"), Some(1));
        assert_eq!(index.count_of("aviv"), Some(1));
    }

    #[tokio::test]
    async fn test_ingest_missing_file_propagates_io_error() {
        let dir = TempDir::new().unwrap();
        let (index, _snapshots, service) = service_in(&dir, false);

        let result = service
            .ingest("file", "/definitely/not/here.txt")
            .await;

        assert!(matches!(result, Err(WordRankError::Io(_))));
        assert!(index.is_empty());
    }

    // ============================================================
    // SERVICE TESTS - persistence and reset
    // ============================================================

    #[tokio::test]
    async fn test_persist_on_write_saves_synchronously() {
        let dir = TempDir::new().unwrap();
        let (_index, snapshots, service) = service_in(&dir, true);

        service.ingest("string", "some data data").await.unwrap();

        // The snapshot landed before ingest returned
        let persisted = snapshots.load().unwrap();
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted[0].word, "data");
        assert_eq!(persisted[0].count, 2);
    }

    #[tokio::test]
    async fn test_persist_disabled_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (_index, _snapshots, service) = service_in(&dir, false);

        service.ingest("string", "some data data").await.unwrap();

        assert!(!dir.path().join("state.txt").exists());
    }

    #[tokio::test]
    async fn test_reset_clears_index_and_state_file() {
        let dir = TempDir::new().unwrap();
        let (index, snapshots, service) = service_in(&dir, true);

        service.ingest("string", "some data data").await.unwrap();
        assert!(dir.path().join("state.txt").exists());

        service.reset().unwrap();

        assert!(index.is_empty());
        assert!(!dir.path().join("state.txt").exists());
        assert!(snapshots.load().unwrap().is_empty());
    }

    // ============================================================
    // TYPES TESTS - DTOs
    // ============================================================

    #[test]
    fn test_post_words_request_wire_format() {
        // The wire field is "type", mapped onto `kind`
        let req: PostWordsRequest =
            serde_json::from_str(r#"{"type":"string","data":"some data"}"#).unwrap();

        assert_eq!(req.kind, "string");
        assert_eq!(req.data, "some data");
    }

    #[test]
    fn test_ingest_response_serialization() {
        let response = IngestResponse {
            status: "indexed".to_string(),
            lines_read: 3,
            words_indexed: 12,
        };

        let json = serde_json::to_string(&response).unwrap();
        let restored: IngestResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.status, "indexed");
        assert_eq!(restored.lines_read, 3);
        assert_eq!(restored.words_indexed, 12);
    }
}
