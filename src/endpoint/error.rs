// Error definitions for endpoint resolution.

use crate::config::BindError;

/// Terminal failures of endpoint resolution. No partial endpoint is ever
/// produced; retrying is the caller's business.
#[derive(Debug, thiserror::Error)]
pub enum ResolveEndpointError {
    #[error(
        "failed to resolve endpoint {uri}: the uri is not configured correctly, \
         the http(s) protocol is duplicated"
    )]
    DuplicatedScheme { uri: String },

    #[error("failed to resolve endpoint {uri}: malformed uri")]
    MalformedUri {
        uri: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("failed to resolve endpoint: {0}")]
    Binding(#[from] BindError),
}

impl ResolveEndpointError {
    /// The offending uri, when the failure is tied to one.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::DuplicatedScheme { uri } | Self::MalformedUri { uri, .. } => Some(uri),
            Self::Binding(_) => None,
        }
    }
}
