//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `lexscopic_core::storage`. The working list is held in memory for the
//! lifetime of the process.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
