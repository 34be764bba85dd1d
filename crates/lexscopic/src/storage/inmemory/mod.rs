//! In-memory storage backend.
//!
//! Keeps the working list in a `Vec` wrapped in `Arc<RwLock<_>>`. Submissions
//! are lost when the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use lexscopic::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::with_events(records);
//! ```

mod repository;

pub use repository::InMemoryRepository;
