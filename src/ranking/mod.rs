//! Ranking Module
//!
//! The core component of the service: a live, rank-ordered word frequency
//! index and the resolver that answers client range queries against it.
//!
//! ## Responsibilities
//! - **Indexing**: Maintaining the (occurrences desc, word asc) sort order
//!   across every increment, under concurrent writers.
//! - **Rank lookup**: Answering "what word is at rank K" as a positional read.
//! - **Range resolution**: Expanding specifications like `"1-3,5"` into
//!   concrete positions and collecting the words found there.
//! - **API**: Exposing the ranking query via the Axum web server.
//!
//! ## Submodules
//! - **`index`**: The sorted sequence + lookup map structure and its lock.
//! - **`resolver`**: Range specification parsing and expansion.
//! - **`handlers`**: HTTP request handlers.
//! - **`types`**: The word/count entry and API response DTOs.

pub mod handlers;
pub mod index;
pub mod resolver;
pub mod types;
