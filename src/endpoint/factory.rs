// Endpoint factory: owns the shared pool and the pluggable slots.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::endpoint::HttpEndpoint;
use super::error::ResolveEndpointError;
use super::uri;
use crate::config::{bind_client_config, ClientConfig, FactoryConfig, PoolSettings, CLIENT_PARAM_PREFIX};
use crate::http::client::ConnectionPool;
use crate::http::configurer::HttpClientConfigurer;
use crate::http::header::{HeaderFilterStrategy, HttpHeaderFilterStrategy};

/// Factory turning textual addresses into [`HttpEndpoint`] descriptors.
///
/// Holds three shared slots: the connection pool, an optional client
/// configurer and the header filter strategy. Endpoint creation reads the
/// current slot values atomically; swapping a slot affects only endpoints
/// created afterwards, earlier ones keep the references they captured.
pub struct HttpEndpointFactory {
    connection_pool: ArcSwap<ConnectionPool>,
    client_configurer: RwLock<Option<Arc<dyn HttpClientConfigurer>>>,
    header_filter_strategy: RwLock<Arc<dyn HeaderFilterStrategy>>,
}

impl HttpEndpointFactory {
    /// Creates a factory with a default multi-threaded pool and the built-in
    /// header filter strategy.
    pub fn new() -> Result<Self> {
        Self::with_settings(&PoolSettings::default())
    }

    /// Creates a factory with a pool built from tuned settings.
    pub fn with_settings(settings: &PoolSettings) -> Result<Self> {
        let pool = ConnectionPool::new(settings).context("build shared connection pool")?;
        Ok(Self {
            connection_pool: ArcSwap::from_pointee(pool),
            client_configurer: RwLock::new(None),
            header_filter_strategy: RwLock::new(Arc::new(HttpHeaderFilterStrategy)),
        })
    }

    /// Creates a factory from loaded configuration.
    pub fn from_config(cfg: &FactoryConfig) -> Result<Self> {
        Self::with_settings(&cfg.pool)
    }

    /// Resolves an address into an endpoint, decoding the parameter map from
    /// the uri's own query component.
    pub fn resolve(&self, uri: &str) -> Result<HttpEndpoint, ResolveEndpointError> {
        let parameters = uri::parse_parameters(uri);
        let remaining = uri::scheme_specific_part(uri).unwrap_or(uri);
        self.create_endpoint(uri, remaining, &parameters)
    }

    /// Produces a validated endpoint or fails.
    ///
    /// Binds `httpClient.`-prefixed parameters onto a fresh [`ClientConfig`],
    /// rejects uris with a duplicated http(s) protocol, parses the uri, and
    /// assembles the endpoint from the factory's current shared references.
    /// `remaining` is the scheme-stripped part of the address and is
    /// informational only.
    pub fn create_endpoint(
        &self,
        uri: &str,
        remaining: &str,
        parameters: &HashMap<String, String>,
    ) -> Result<HttpEndpoint, ResolveEndpointError> {
        let mut client_config = ClientConfig::default();
        bind_client_config(&mut client_config, parameters, CLIENT_PARAM_PREFIX)?;

        uri::check_duplicated_scheme(uri)?;
        let parsed = uri::parse_uri(uri)?;

        debug!(
            uri = %uri,
            remaining = %remaining,
            parameters = parameters.len(),
            "created http endpoint"
        );

        Ok(HttpEndpoint::new(
            uri.to_string(),
            parsed,
            client_config,
            self.connection_pool.load_full(),
            self.client_configurer.read().clone(),
            self.header_filter_strategy.read().clone(),
        ))
    }

    /// Registers a server-side listener for the endpoint's address.
    ///
    /// Declared for contract symmetry with the consumer subsystem; this
    /// factory performs no transport registration.
    pub fn connect(&self, endpoint: &HttpEndpoint) -> Result<()> {
        debug!(uri = %endpoint.raw_uri(), "connect is a no-op for http endpoints");
        Ok(())
    }

    /// Deregisters a server-side listener for the endpoint's address.
    /// No-op, see [`connect`](Self::connect).
    pub fn disconnect(&self, endpoint: &HttpEndpoint) -> Result<()> {
        debug!(uri = %endpoint.raw_uri(), "disconnect is a no-op for http endpoints");
        Ok(())
    }

    /// The currently shared connection pool.
    pub fn connection_pool(&self) -> Arc<ConnectionPool> {
        self.connection_pool.load_full()
    }

    /// Replaces the shared pool. Endpoints created before this call keep
    /// their original pool reference.
    pub fn set_connection_pool(&self, pool: Arc<ConnectionPool>) {
        warn!("replacing shared connection pool, existing endpoints keep the previous one");
        self.connection_pool.store(pool);
    }

    /// The currently active client configurer, if any.
    pub fn client_configurer(&self) -> Option<Arc<dyn HttpClientConfigurer>> {
        self.client_configurer.read().clone()
    }

    /// Installs or clears the client configurer.
    pub fn set_client_configurer(&self, configurer: Option<Arc<dyn HttpClientConfigurer>>) {
        *self.client_configurer.write() = configurer;
    }

    /// The currently active header filter strategy. Never absent; the
    /// default is seeded at construction.
    pub fn header_filter_strategy(&self) -> Arc<dyn HeaderFilterStrategy> {
        self.header_filter_strategy.read().clone()
    }

    /// Replaces the header filter strategy.
    pub fn set_header_filter_strategy(&self, strategy: Arc<dyn HeaderFilterStrategy>) {
        *self.header_filter_strategy.write() = strategy;
    }
}
