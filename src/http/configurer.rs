// Client customization hook.

use hyper_util::client::legacy::Builder;

/// Hook applied to the underlying client builder before a client is built,
/// letting callers tune client-level settings (TLS, proxy, auth) the typed
/// configuration surface does not cover.
///
/// The factory holds at most one active configurer; absent means no
/// customization. Swapping it affects only endpoints (and pools) created
/// afterwards.
pub trait HttpClientConfigurer: Send + Sync {
    fn configure(&self, builder: &mut Builder);
}
