// Uri validation and query decoding helpers.

use std::collections::HashMap;

use super::error::ResolveEndpointError;

/// Returns the scheme-specific part of a uri, the text after `scheme:`.
pub fn scheme_specific_part(uri: &str) -> Option<&str> {
    uri.split_once(':').map(|(_, rest)| rest)
}

/// Rejects uris where the end-user duplicated the http part, a common error
/// of writing `http://http://host` or `http:http://host` style addresses.
pub fn check_duplicated_scheme(uri: &str) -> Result<(), ResolveEndpointError> {
    let Some(part) = scheme_specific_part(uri) else {
        return Ok(());
    };
    let lowered = part.to_ascii_lowercase();
    let rest = lowered.strip_prefix("//").unwrap_or(&lowered);
    if rest.starts_with("http://") || rest.starts_with("https://") {
        return Err(ResolveEndpointError::DuplicatedScheme {
            uri: uri.to_string(),
        });
    }
    Ok(())
}

/// Parses the uri into its structured form.
pub fn parse_uri(uri: &str) -> Result<hyper::Uri, ResolveEndpointError> {
    uri.parse().map_err(|source| ResolveEndpointError::MalformedUri {
        uri: uri.to_string(),
        source,
    })
}

/// Decodes the query component into a parameter map. Keys are unique; on
/// duplicates the last occurrence wins.
pub fn parse_parameters(uri: &str) -> HashMap<String, String> {
    let Some((_, query)) = uri.split_once('?') else {
        return HashMap::new();
    };
    let query = query.split('#').next().unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
