//! Ingestion Data Types
//!
//! Defines the source kind dispatch enum and the Data Transfer Objects
//! (DTOs) used by the ingestion API.

use crate::error::{Result, WordRankError};
use serde::{Deserialize, Serialize};

/// The three ways text can reach the service, resolved once at the ingestion
/// boundary from the client-supplied kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind<'a> {
    /// The payload is the text itself.
    Inline(&'a str),
    /// The payload is a local path, opened for reading with no pre-check.
    File(&'a str),
    /// The payload is a URL; whatever it serves is read as text, HTML
    /// markup included.
    Remote(&'a str),
}

impl<'a> SourceKind<'a> {
    /// Maps the wire-level kind string onto a variant. Fails before any data
    /// is read when the kind is unknown.
    pub fn parse(kind: &str, data: &'a str) -> Result<Self> {
        match kind {
            "string" => Ok(SourceKind::Inline(data)),
            "file" => Ok(SourceKind::File(data)),
            "url" => Ok(SourceKind::Remote(data)),
            other => Err(WordRankError::UnrecognizedInputKind(other.to_string())),
        }
    }
}

/// Request body for posting new words, mirroring the public API contract:
/// `{"type": "string" | "file" | "url", "data": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostWordsRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
}

/// Response returned to the client after an ingestion request.
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
    pub lines_read: usize,
    pub words_indexed: usize,
}

/// Response for the manual snapshot and reset endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct StateOpResponse {
    pub status: String,
}

/// Counters describing one completed ingestion pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestStats {
    pub lines_read: usize,
    pub words_indexed: usize,
}
