#[cfg(test)]
mod tests;

pub mod config;
pub mod endpoint;
pub mod http;

// Re-export main types
pub use config::{bind_client_config, BindError, ClientConfig, FactoryConfig, PoolSettings};
pub use endpoint::{HttpEndpoint, HttpEndpointFactory, ResolveEndpointError};
pub use http::client::{ConnectionPool, HyperClient};
pub use http::configurer::HttpClientConfigurer;
pub use http::header::{Direction, HeaderFilterStrategy, HttpHeaderFilterStrategy};
