//! lexscopic_client - CLI client for the lexscopic API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::LexscopicClient;
pub use error::{ClientError, Result};
