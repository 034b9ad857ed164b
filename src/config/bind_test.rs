#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use crate::config::{bind_client_config, BindError, ClientConfig, CLIENT_PARAM_PREFIX};

    fn params(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Test that every recognized key lands on its typed field.
    #[test]
    fn test_bind_all_known_keys() {
        let mut cfg = ClientConfig::default();
        let parameters = params(&[
            ("httpClient.soTimeout", "5000"),
            ("httpClient.connectionTimeout", "3000"),
            ("httpClient.bufferSize", "16384"),
            ("httpClient.maxRetries", "3"),
            ("httpClient.tcpNoDelay", "true"),
            ("httpClient.staleCheckingEnabled", "false"),
        ]);

        bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap();

        assert_eq!(cfg.so_timeout, Some(Duration::from_millis(5000)));
        assert_eq!(cfg.connection_timeout, Some(Duration::from_millis(3000)));
        assert_eq!(cfg.buffer_size, Some(16384));
        assert_eq!(cfg.max_retries, Some(3));
        assert_eq!(cfg.tcp_no_delay, Some(true));
        assert_eq!(cfg.stale_check, Some(false));
    }

    /// Test that keys without the prefix never touch the config.
    #[test]
    fn test_bind_ignores_unprefixed_keys() {
        let mut cfg = ClientConfig::default();
        let parameters = params(&[
            ("soTimeout", "5000"),
            ("bridgeEndpoint", "true"),
            ("throwExceptionOnFailure", "false"),
        ]);

        bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap();

        assert_eq!(cfg, ClientConfig::default());
    }

    /// Test that prefixed keys matching no field are silently ignored.
    #[test]
    fn test_bind_ignores_unknown_prefixed_keys() {
        let mut cfg = ClientConfig::default();
        let parameters = params(&[
            ("httpClient.futureOption", "42"),
            ("httpClient.soTimeout", "1000"),
        ]);

        bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap();

        assert_eq!(cfg.so_timeout, Some(Duration::from_millis(1000)));
        assert_eq!(cfg.buffer_size, None);
    }

    /// Test that a recognized key with an un-coercible value is an error
    /// naming the key.
    #[test]
    fn test_bind_type_mismatch_names_key() {
        let mut cfg = ClientConfig::default();
        let parameters = params(&[("httpClient.soTimeout", "fast")]);

        let err = bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap_err();

        match err {
            BindError::TypeMismatch { key, value, .. } => {
                assert_eq!(key, "httpClient.soTimeout");
                assert_eq!(value, "fast");
            }
        }
    }

    /// Test that a boolean field rejects non-boolean values.
    #[test]
    fn test_bind_bool_mismatch() {
        let mut cfg = ClientConfig::default();
        let parameters = params(&[("httpClient.tcpNoDelay", "yes")]);

        let err = bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("httpClient.tcpNoDelay"), "got: {}", msg);
        assert!(msg.contains("a boolean"), "got: {}", msg);
    }

    /// Test that binding matches field names case-sensitively.
    #[test]
    fn test_bind_case_sensitive_keys() {
        let mut cfg = ClientConfig::default();
        let parameters = params(&[("httpClient.sotimeout", "5000")]);

        bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap();

        assert_eq!(cfg.so_timeout, None);
    }

    /// Test that an empty parameter map leaves the config at defaults.
    #[test]
    fn test_bind_empty_parameters() {
        let mut cfg = ClientConfig::default();
        let parameters = HashMap::new();

        bind_client_config(&mut cfg, &parameters, CLIENT_PARAM_PREFIX).unwrap();

        assert_eq!(cfg, ClientConfig::default());
    }
}
