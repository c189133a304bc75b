pub mod account;
pub mod client;
pub mod fs;
pub mod upload;

pub use client::{ApiResponse, StorageClient};
