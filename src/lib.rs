//! Word Ranking Service Library
//!
//! This library crate defines the core modules of the word frequency ranking
//! service. It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems plus a shared
//! error type:
//!
//! - **`ranking`**: The core frequency index. Maintains every tracked word in
//!   a sequence sorted by (occurrences desc, word asc) so that rank lookups
//!   are positional reads, and resolves client range specifications against it.
//! - **`ingestion`**: The data intake pipeline. Acquires text from inline
//!   strings, local files or remote URLs, tokenizes it line by line and feeds
//!   normalized words into the index.
//! - **`snapshot`**: The persistence layer. Serializes the sorted index to a
//!   single on-disk state file and rehydrates it on startup.

pub mod error;
pub mod ingestion;
pub mod ranking;
pub mod snapshot;
