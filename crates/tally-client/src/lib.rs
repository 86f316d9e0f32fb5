pub mod client;
pub mod endpoint;
pub mod fetcher;
pub mod error;

// Re-exports
pub use client::HttpFetcher;
pub use endpoint::{ApiEndpoint, DEFAULT_BASE_URL};
pub use fetcher::{OwnerLookup, RecordFetcher};
pub use error::{Error, Result};
