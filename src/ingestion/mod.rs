//! Ingestion Module
//!
//! Handles the acquisition and indexing of text from external sources.
//!
//! ## Workflow
//! 1. **Dispatch**: The client-supplied kind string (`string`, `file`, `url`)
//!    is resolved into a `SourceKind` at the boundary; unknown kinds are
//!    rejected before any data is read.
//! 2. **Read**: The source is consumed line by line (inline text directly,
//!    files via buffered reads, URLs via HTTP fetch).
//! 3. **Tokenize**: Each line is split into tokens, which are lowercased and
//!    counted into the ranked index.
//! 4. **Persist**: With persist-on-write enabled, a full snapshot is written
//!    synchronously before the ingest call returns.

pub mod handlers;
pub mod service;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;
