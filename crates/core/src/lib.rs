//! Functional core for LexScopic.
//!
//! Pure event-listing logic: records, filter criteria, the visible-listing
//! projection, display grouping, submission, and the repository seam the
//! server implements. Nothing in this crate performs I/O.

pub mod events;
pub mod serde;
pub mod storage;
