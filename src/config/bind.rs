// Binding of string endpoint parameters onto the typed client config.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use tracing::trace;

use super::ClientConfig;

/// Prefix selecting the endpoint parameters that target the HTTP client.
pub const CLIENT_PARAM_PREFIX: &str = "httpClient.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("cannot bind parameter {key}={value}: expected {expected}")]
    TypeMismatch {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Applies every entry of `parameters` whose key starts with `prefix` onto
/// `target`, matching the stripped key against the known field names.
///
/// Recognized keys with values that cannot be coerced fail with a
/// [`BindError`] naming the offending key. Keys without the prefix, and
/// prefixed keys that match no field, are left untouched so callers can
/// carry extra parameters without breaking older consumers.
pub fn bind_client_config(
    target: &mut ClientConfig,
    parameters: &HashMap<String, String>,
    prefix: &str,
) -> Result<(), BindError> {
    for (key, value) in parameters {
        let Some(stripped) = key.strip_prefix(prefix) else {
            continue;
        };
        match stripped {
            "soTimeout" => target.so_timeout = Some(parse_millis(key, value)?),
            "connectionTimeout" => target.connection_timeout = Some(parse_millis(key, value)?),
            "bufferSize" => target.buffer_size = Some(parse_value(key, value, "a byte count")?),
            "maxRetries" => target.max_retries = Some(parse_value(key, value, "a retry count")?),
            "tcpNoDelay" => target.tcp_no_delay = Some(parse_value(key, value, "a boolean")?),
            "staleCheckingEnabled" => {
                target.stale_check = Some(parse_value(key, value, "a boolean")?)
            }
            _ => {
                trace!(key = %key, "ignoring unrecognized client parameter");
            }
        }
    }
    Ok(())
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, BindError> {
    let ms: u64 = parse_value(key, value, "a duration in milliseconds")?;
    Ok(Duration::from_millis(ms))
}

fn parse_value<T: FromStr>(
    key: &str,
    value: &str,
    expected: &'static str,
) -> Result<T, BindError> {
    value.parse().map_err(|_| BindError::TypeMismatch {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    })
}
