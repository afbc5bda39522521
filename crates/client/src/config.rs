//! Configuration for the upstream Linear client.

use std::time::Duration;
use url::Url;

pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Configuration for [`crate::LinearClient`].
///
/// The client is stateless aside from these two values; there is no
/// retry or backoff configuration because upstream failures propagate
/// immediately as typed errors.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint to POST operations to.
    pub endpoint: Url,
    /// Timeout applied to each outbound call.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The constant is a valid URL; parsing it cannot fail.
        let endpoint = Url::parse(LINEAR_API_URL)
            .unwrap_or_else(|_| unreachable!("LINEAR_API_URL is a valid URL"));
        Self::new(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_linear() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint.as_str(), LINEAR_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn custom_endpoint_is_kept() {
        let url = Url::parse("http://localhost:9999/graphql").unwrap();
        let config = ClientConfig::new(url.clone());
        assert_eq!(config.endpoint, url);
    }
}
