//! Session management for Shopware Admin API authentication.

use std::fmt;
use std::sync::Arc;

use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::clock::Clock;
use crate::models::BaseUrl;
use crate::{Error, Result};

/// Path of the OAuth token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/api/oauth/token";

/// Integration credentials (access key ID and secret access key).
///
/// Both values are kept in [`SecretString`]s and never appear in `Debug`
/// output. Empty values are accepted; the token endpoint rejects them on
/// first use.
#[derive(Clone)]
pub struct Credentials {
    access_key: SecretString,
    secret_key: SecretString,
}

impl Credentials {
    /// Create credentials from an access key and a secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: SecretString::from(access_key.into()),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// `Authorization` header value for the client-credentials exchange:
    /// `Basic base64(access_key:secret_key)`.
    pub(crate) fn basic_auth_header(&self) -> SecretString {
        let pair = format!(
            "{}:{}",
            self.access_key.expose_secret(),
            self.secret_key.expose_secret()
        );
        let encoded = general_purpose::STANDARD.encode(pair.as_bytes());
        SecretString::from(format!("Basic {}", encoded))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Authentication session for the Shopware Admin API.
///
/// The session exchanges [`Credentials`] for a bearer token and caches it
/// together with its expiry instant. The cache starts empty; the first
/// authenticated call fills it.
///
/// # Thread Safety
///
/// `Session` is cheap to clone and can be shared across tasks. Refreshes
/// happen under a write lock and re-check expiry after acquiring it, so
/// concurrent callers that all observe an expired token cause a single
/// token exchange.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
    credentials: Arc<Credentials>,
    token_url: Arc<str>,
    http: reqwest::Client,
    clock: Arc<dyn Clock>,
}

#[derive(Default)]
struct SessionInner {
    token: Option<CachedToken>,
}

struct CachedToken {
    value: SecretString,
    expires_at: i64,
}

impl CachedToken {
    /// A token expiring exactly at `now` is already expired.
    fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

impl Session {
    pub(crate) fn new(
        credentials: Credentials,
        base_url: &BaseUrl,
        http: reqwest::Client,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner::default())),
            credentials: Arc::new(credentials),
            token_url: base_url.join(TOKEN_PATH).into(),
            http,
            clock,
        }
    }

    /// Exchange the credentials for a new bearer token.
    ///
    /// The new token and its expiry replace whatever was cached, even if the
    /// cached token was still valid. Returns the raw token string.
    ///
    /// # Errors
    ///
    /// - [`Error::Authentication`] if the token endpoint answers with a
    ///   non-success status.
    /// - [`Error::MalformedResponse`] if the success body lacks
    ///   `access_token` or `expires_in`, or `expires_in` overflows the expiry.
    /// - [`Error::Http`] on transport failure.
    pub async fn authenticate(&self) -> Result<String> {
        let mut inner = self.inner.write().await;
        let token = self.exchange_token().await?;
        let value = token.value.expose_secret().to_string();
        inner.token = Some(token);
        Ok(value)
    }

    /// Return a token that is valid right now, authenticating first if the
    /// cache is empty or expired.
    pub(crate) async fn valid_token(&self) -> Result<String> {
        {
            let inner = self.inner.read().await;
            if let Some(token) = &inner.token {
                if token.is_valid_at(self.clock.now_epoch_secs()) {
                    tracing::debug!(expires_at = token.expires_at, "reusing cached access token");
                    return Ok(token.value.expose_secret().to_string());
                }
            }
        }

        let mut inner = self.inner.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(token) = &inner.token {
            if token.is_valid_at(self.clock.now_epoch_secs()) {
                return Ok(token.value.expose_secret().to_string());
            }
        }

        let token = self.exchange_token().await?;
        let value = token.value.expose_secret().to_string();
        inner.token = Some(token);
        Ok(value)
    }

    /// Check if there is no usable token (none cached, or expired).
    pub async fn is_expired(&self) -> bool {
        let inner = self.inner.read().await;
        match &inner.token {
            Some(token) => !token.is_valid_at(self.clock.now_epoch_secs()),
            None => true,
        }
    }

    /// Expiry of the cached token as Unix epoch seconds, if a token is cached.
    pub async fn expires_at_epoch_secs(&self) -> Option<i64> {
        self.inner.read().await.token.as_ref().map(|t| t.expires_at)
    }

    async fn exchange_token(&self) -> Result<CachedToken> {
        tracing::debug!(url = %self.token_url, "requesting access token");

        let authorization = self.credentials.basic_auth_header();
        let response = self
            .http
            .post(&*self.token_url)
            .header(AUTHORIZATION, authorization.expose_secret())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&serde_json::json!({
                "grant_type": "client_credentials",
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token exchange rejected");
            return Err(Error::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let token_response: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("token response: {}", e)))?;

        let expires_at = self
            .clock
            .now_epoch_secs()
            .checked_add(token_response.expires_in)
            .ok_or_else(|| {
                Error::MalformedResponse("token response: expires_in out of range".to_string())
            })?;
        tracing::info!(
            expires_in = token_response.expires_in,
            expires_at,
            "obtained access token"
        );

        Ok(CachedToken {
            value: SecretString::from(token_response.access_token),
            expires_at,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token_url", &self.token_url)
            .field("credentials", &self.credentials)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ManualClock;

    fn session_with_token(value: &str, expires_at: i64, now: i64) -> Session {
        let session = Session::new(
            Credentials::new("key", "secret"),
            &BaseUrl::new("https://shop.example.com/"),
            reqwest::Client::new(),
            Arc::new(ManualClock::new(now)),
        );
        session.inner.try_write().unwrap().token = Some(CachedToken {
            value: SecretString::from(value.to_string()),
            expires_at,
        });
        session
    }

    #[test]
    fn test_basic_auth_header_encoding() {
        let credentials = Credentials::new("SWIAKEY", "s3cr3t");
        let header = credentials.basic_auth_header();
        // base64("SWIAKEY:s3cr3t")
        assert_eq!(header.expose_secret(), "Basic U1dJQUtFWTpzM2NyM3Q=");
    }

    #[test]
    fn test_basic_auth_header_with_empty_credentials() {
        let header = Credentials::new("", "").basic_auth_header();
        // base64(":")
        assert_eq!(header.expose_secret(), "Basic Og==");
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let debug_str = format!("{:?}", Credentials::new("my-access-key", "my-secret-key"));
        assert!(!debug_str.contains("my-access-key"));
        assert!(!debug_str.contains("my-secret-key"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = session_with_token("super-secret-token", 2_000, 1_000);
        let debug_str = format!("{:?}", session);

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
        assert!(debug_str.contains("https://shop.example.com/api/oauth/token"));
    }

    #[test]
    fn test_token_expiry_boundary_is_inclusive() {
        let token = CachedToken {
            value: SecretString::from("t".to_string()),
            expires_at: 600,
        };
        assert!(token.is_valid_at(599));
        assert!(!token.is_valid_at(600));
        assert!(!token.is_valid_at(601));
    }

    #[tokio::test]
    async fn test_is_expired_without_token() {
        let session = Session::new(
            Credentials::new("key", "secret"),
            &BaseUrl::new("https://shop.example.com"),
            reqwest::Client::new(),
            Arc::new(ManualClock::new(0)),
        );
        assert!(session.is_expired().await);
        assert_eq!(session.expires_at_epoch_secs().await, None);
    }

    #[tokio::test]
    async fn test_cached_token_reused_before_expiry() {
        // No server behind this URL: a refresh attempt would fail.
        let session = session_with_token("cached", 1_600, 1_599);
        assert!(!session.is_expired().await);
        assert_eq!(session.valid_token().await.unwrap(), "cached");
        assert_eq!(session.expires_at_epoch_secs().await, Some(1_600));
    }
}
