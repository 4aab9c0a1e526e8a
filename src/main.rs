use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use word_rank_service::ingestion::handlers::{handle_post_words, handle_reset, handle_save};
use word_rank_service::ingestion::service::IngestionService;
use word_rank_service::ranking::handlers::handle_word_ranking;
use word_rank_service::ranking::index::RankedIndex;
use word_rank_service::snapshot::store::{DEFAULT_STATE_FILENAME, SnapshotStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --bind <addr:port> [--state <path>] [--no-persist]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:8080", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:8080 --state /var/lib/words/state.txt",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut state_path = DEFAULT_STATE_FILENAME.to_string();
    let mut persist_on_write = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--state" => {
                state_path = args[i + 1].clone();
                i += 2;
            }
            "--no-persist" => {
                persist_on_write = false;
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");

    tracing::info!("Starting word ranking service on {}", bind_addr);
    tracing::info!(
        "State file: {} (persist-on-write: {})",
        state_path,
        persist_on_write
    );

    // 1. Core index and persistence:
    let index = Arc::new(RankedIndex::new());
    let snapshots = Arc::new(SnapshotStore::new(&state_path));

    // 2. Rehydrate a previous state, if one was persisted:
    let restored = snapshots.load()?;
    if !restored.is_empty() {
        tracing::info!("Restored {} words from {}", restored.len(), state_path);
        index.restore(restored);
    } else {
        tracing::info!("No persisted state found, starting empty");
    }

    // 3. Ingestion pipeline:
    let service = Arc::new(IngestionService::new(
        index.clone(),
        snapshots.clone(),
        persist_on_write,
    ));

    // 4. HTTP Router:
    let app = Router::new()
        .route("/words", post(handle_post_words))
        .route("/word_ranking", get(handle_word_ranking))
        .route("/save", post(handle_save))
        .route("/reset", post(handle_reset))
        .layer(Extension(index))
        .layer(Extension(service));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
