// HTTP module: pooled client, configurer hook, header filtering.

pub mod client;
pub mod configurer;
pub mod header;

// Re-export main types
pub use client::{ConnectionPool, HyperClient};
pub use configurer::HttpClientConfigurer;
pub use header::{Direction, HeaderFilterStrategy, HttpHeaderFilterStrategy};
