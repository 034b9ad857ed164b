// Resolved endpoint descriptor.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::http::client::ConnectionPool;
use crate::http::configurer::HttpClientConfigurer;
use crate::http::header::HeaderFilterStrategy;

/// Immutable, reusable descriptor of one HTTP endpoint.
///
/// Produced by [`HttpEndpointFactory`](super::HttpEndpointFactory); consumed
/// by the request-execution layer. Holds shared references to the factory's
/// connection pool, optional client configurer and header filter strategy,
/// all captured at construction time. The factory is not involved again
/// once an endpoint exists.
#[derive(Clone)]
pub struct HttpEndpoint {
    raw_uri: String,
    uri: hyper::Uri,
    client_config: ClientConfig,
    connection_pool: Arc<ConnectionPool>,
    client_configurer: Option<Arc<dyn HttpClientConfigurer>>,
    header_filter_strategy: Arc<dyn HeaderFilterStrategy>,
}

impl HttpEndpoint {
    pub(super) fn new(
        raw_uri: String,
        uri: hyper::Uri,
        client_config: ClientConfig,
        connection_pool: Arc<ConnectionPool>,
        client_configurer: Option<Arc<dyn HttpClientConfigurer>>,
        header_filter_strategy: Arc<dyn HeaderFilterStrategy>,
    ) -> Self {
        Self {
            raw_uri,
            uri,
            client_config,
            connection_pool,
            client_configurer,
            header_filter_strategy,
        }
    }

    /// The address string exactly as the caller supplied it, kept for
    /// diagnostics.
    pub fn raw_uri(&self) -> &str {
        &self.raw_uri
    }

    /// Parsed scheme/authority/path decomposition.
    pub fn uri(&self) -> &hyper::Uri {
        &self.uri
    }

    /// Client tuning bound from `httpClient.`-prefixed parameters.
    pub fn client_config(&self) -> &ClientConfig {
        &self.client_config
    }

    /// The shared connection pool; outlives any single endpoint.
    pub fn connection_pool(&self) -> &Arc<ConnectionPool> {
        &self.connection_pool
    }

    /// Optional client customization hook, absent unless the factory had one
    /// set when this endpoint was created.
    pub fn client_configurer(&self) -> Option<&Arc<dyn HttpClientConfigurer>> {
        self.client_configurer.as_ref()
    }

    /// The header filter strategy active when this endpoint was created.
    pub fn header_filter_strategy(&self) -> &Arc<dyn HeaderFilterStrategy> {
        &self.header_filter_strategy
    }
}

impl std::fmt::Debug for HttpEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpEndpoint")
            .field("raw_uri", &self.raw_uri)
            .field("client_config", &self.client_config)
            .field("has_configurer", &self.client_configurer.is_some())
            .finish_non_exhaustive()
    }
}
