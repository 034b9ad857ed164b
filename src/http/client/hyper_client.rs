//! Hyper HTTP client pool shared across endpoints.
//!
//! Connection accounting (active/idle slots, per-host limits) lives inside
//! hyper-util's legacy client and is internally synchronized; this module
//! only builds the client from [`PoolSettings`] and hands out shared
//! references.

use anyhow::{Context, Result};
use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::dns::GaiResolver;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::config::PoolSettings;
use crate::http::configurer::HttpClientConfigurer;

pub type HyperClient =
    Client<HttpsConnector<HttpConnector<GaiResolver>>, BoxBody<Bytes, hyper::Error>>;

/// Shared pool of reusable outbound connections.
///
/// One instance is owned by the endpoint factory and referenced by every
/// endpoint it creates. The pool has no explicit destroy operation; idle
/// sockets are released when the process shuts down.
pub struct ConnectionPool {
    settings: PoolSettings,
    client: HyperClient,
}

impl ConnectionPool {
    /// Builds a pool from the given settings, with no client customization.
    pub fn new(settings: &PoolSettings) -> Result<Self> {
        Self::with_configurer(settings, None)
    }

    /// Builds a pool, invoking the configurer (when present) against the
    /// client builder before the client is constructed.
    pub fn with_configurer(
        settings: &PoolSettings,
        configurer: Option<&dyn HttpClientConfigurer>,
    ) -> Result<Self> {
        let resolver = GaiResolver::new();

        let mut http_connector = HttpConnector::new_with_resolver(resolver);
        http_connector.set_nodelay(settings.tcp_no_delay);
        http_connector.set_keepalive(Some(settings.keep_alive));
        http_connector.set_connect_timeout(Some(settings.connect_timeout));

        let tls = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .context("failed to load native root certificates")?
            .https_or_http()
            .enable_http1()
            .wrap_connector(http_connector);

        let mut builder = Client::builder(TokioExecutor::new());
        builder
            .pool_idle_timeout(settings.idle_timeout)
            .pool_max_idle_per_host(settings.max_idle_per_host)
            .retry_canceled_requests(true);

        if let Some(configurer) = configurer {
            configurer.configure(&mut builder);
        }

        Ok(Self {
            settings: settings.clone(),
            client: builder.build(tls),
        })
    }

    /// The underlying pooled client, used by the exchange layer to issue
    /// requests.
    pub fn client(&self) -> &HyperClient {
        &self.client
    }

    /// The settings this pool was built with.
    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }
}

impl std::fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
