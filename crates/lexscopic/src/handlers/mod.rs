pub mod error;
pub mod events;
pub mod health;
pub mod pages;

pub use error::AppError;
