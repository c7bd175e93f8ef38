//! Client configuration options.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{Clock, SystemClock};

/// Configuration for the Shopware Admin client.
///
/// # Example
///
/// ```
/// use shopware_admin::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout applied by the HTTP transport
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Clock used to compute and check token expiry
    pub clock: Arc<dyn Clock>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("shopware-admin-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            clock: Arc::new(SystemClock),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a custom clock for token expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ManualClock;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("shopware-admin-rs/"));
    }

    #[test]
    fn test_builder_overrides() {
        let clock = Arc::new(ManualClock::new(42));
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("sync-job/2.1")
            .with_clock(clock);

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "sync-job/2.1");
        assert_eq!(config.clock.now_epoch_secs(), 42);
    }
}
