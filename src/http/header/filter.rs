//! HTTP header filtering across the client boundary.

/// Direction a header is traveling in, relative to this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Response header arriving from the remote server.
    In,
    /// Request header leaving for the remote server.
    Out,
}

/// Decides whether a given header name may cross the HTTP boundary.
pub trait HeaderFilterStrategy: Send + Sync {
    /// Returns true when the header must be dropped for the given direction.
    fn should_filter(&self, name: &str, direction: Direction) -> bool;
}

/// Hop-by-hop headers that must not be forwarded (RFC 7230, section 6.1).
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "proxy-connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Transport-level headers the client owns on outbound requests; carrying
/// them over from an inbound message would conflict with what the client
/// computes itself.
const OUTBOUND_ONLY: &[&str] = &["host", "content-length"];

/// Default strategy tuned for plain HTTP semantics: hop-by-hop headers are
/// stripped in both directions, `Host` and `Content-Length` additionally on
/// the outbound side.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpHeaderFilterStrategy;

impl HeaderFilterStrategy for HttpHeaderFilterStrategy {
    fn should_filter(&self, name: &str, direction: Direction) -> bool {
        if HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h)) {
            return true;
        }
        direction == Direction::Out
            && OUTBOUND_ONLY.iter().any(|h| name.eq_ignore_ascii_case(h))
    }
}

/// Applies a strategy to a header list, keeping entries the strategy lets
/// through.
pub fn filter_headers(
    strategy: &dyn HeaderFilterStrategy,
    headers: &[(String, String)],
    direction: Direction,
) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(key, _)| !strategy.should_filter(key, direction))
        .cloned()
        .collect()
}
