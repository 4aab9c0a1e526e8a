//! Snapshot Module
//!
//! The persistence layer: serializes the sorted index contents to a single
//! on-disk state file and rehydrates them at process start.
//!
//! ## Core Concepts
//! - **Full snapshots**: Every save writes the entire sorted sequence; there
//!   is no delta or incremental persistence.
//! - **Non-destructive empty save**: Saving an empty index is a no-op, so a
//!   reset followed by a save cannot erase a prior snapshot file.
//! - **Trusted order**: The file is written in rank order and loaded back
//!   verbatim; the sort invariant is not re-validated on load.

pub mod store;
