//! HTTP client implementation for the Shopware Admin API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use crate::api::ProductsService;
use crate::auth::{Credentials, Session};
use crate::models::{BaseUrl, ProductId, ProductListResponse, ProductPatch, UpdateResult};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Shopware Admin API.
///
/// The client owns the integration credentials and a token cache. Every
/// API call first makes sure a valid bearer token is cached, exchanging the
/// credentials for a new one when needed, then issues its request.
///
/// # Example
///
/// ```no_run
/// use shopware_admin::{ProductPatch, ShopwareClient};
///
/// # async fn example() -> shopware_admin::Result<()> {
/// let client = ShopwareClient::new(
///     "your-access-key",
///     "your-secret-key",
///     "https://shop.example.com",
/// )?;
///
/// let products = client.list_products(1, 1).await?;
/// if let Some(id) = products.first_id() {
///     let patch = ProductPatch::new().set("name", "Renamed");
///     let result = client.update_product(id, patch).await?;
///     println!("{:?}", result.message());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ShopwareClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) base_url: BaseUrl,
    pub(crate) config: ClientConfig,
}

/// Status and raw body of a successful response.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) body: String,
}

impl ShopwareClient {
    /// Create a client for the instance at `base_url`.
    ///
    /// Trailing slashes in `base_url` are stripped. Credentials are not
    /// checked here; no request is made until the first API call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP transport cannot be built.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(access_key, secret_key),
            BaseUrl::new(base_url),
            ClientConfig::default(),
        )
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        credentials: Credentials,
        base_url: BaseUrl,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let session = Session::new(credentials, &base_url, http.clone(), config.clock.clone());

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                base_url,
                config,
            }),
        })
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// List products, one page at a time.
    ///
    /// Shorthand for [`ProductsService::list`].
    pub async fn list_products(&self, limit: i64, page: i64) -> Result<ProductListResponse> {
        self.products().list(limit, page).await
    }

    /// Partially update a product.
    ///
    /// Shorthand for [`ProductsService::update`].
    pub async fn update_product(
        &self,
        product_id: impl Into<ProductId>,
        fields: impl Into<ProductPatch>,
    ) -> Result<UpdateResult> {
        self.products().update(product_id, fields).await
    }

    /// Exchange the credentials for a new token, replacing the cached one.
    ///
    /// Only needed to force a refresh; API calls authenticate on demand.
    pub async fn authenticate(&self) -> Result<String> {
        self.inner.session.authenticate().await
    }

    /// Headers for an authenticated request, authenticating first if the
    /// cached token is missing or expired.
    pub async fn ensure_valid_token(&self) -> Result<HeaderMap> {
        self.inner.ensure_valid_token().await
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}

impl ClientInner {
    /// Build request headers carrying a currently valid bearer token.
    pub(crate) async fn ensure_valid_token(&self) -> Result<HeaderMap> {
        let token = self.session.valid_token().await?;

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request with query parameters and parse the JSON body.
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<serde_json::Value> {
        let headers = self.ensure_valid_token().await?;
        let url = self.base_url.join(path);
        tracing::debug!(method = "GET", %url, "sending request");

        let response = self.http.get(&url).headers(headers).query(query).send().await?;
        let raw = self.handle_response(response).await?;

        serde_json::from_str(&raw.body)
            .map_err(|e| Error::MalformedResponse(format!("GET {}: {}", path, e)))
    }

    /// Make a PATCH request with a JSON body.
    ///
    /// The body is returned unparsed; some endpoints answer with no content.
    /// Serialization happens before any request is made.
    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse> {
        let payload = serde_json::to_vec(body)?;
        let headers = self.ensure_valid_token().await?;
        let url = self.base_url.join(path);
        tracing::debug!(method = "PATCH", %url, "sending request");

        let response = self.http.patch(&url).headers(headers).body(payload).send().await?;
        self.handle_response(response).await
    }

    /// Turn a non-success status into [`Error::Api`], keeping the raw body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(RawResponse { status, body })
        } else {
            tracing::warn!(status = status.as_u16(), "API request failed");
            Err(Error::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl Clone for ShopwareClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for ShopwareClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopwareClient")
            .field("base_url", &self.inner.base_url)
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = ShopwareClient::new("key", "secret", "https://example.com/").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn test_new_accepts_empty_credentials() {
        assert!(ShopwareClient::new("", "", "https://example.com").is_ok());
    }

    #[test]
    fn test_debug_does_not_leak_credentials() {
        let client = ShopwareClient::new("visible-key", "visible-secret", "https://example.com")
            .unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("https://example.com"));
        assert!(!debug_str.contains("visible-secret"));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("field cannot be encoded"))
        }
    }

    #[tokio::test]
    async fn test_patch_body_serialization_error() {
        // Nothing listens here: the error must come before any request.
        let client = ShopwareClient::new("key", "secret", "http://127.0.0.1:9").unwrap();
        let err = client
            .inner
            .patch("/api/product/42", &Unserializable)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Json(_)));
        assert!(client.session().is_expired().await);
    }

    #[tokio::test]
    async fn test_fresh_client_has_no_token() {
        let client = ShopwareClient::new("key", "secret", "https://example.com").unwrap();
        assert!(client.session().is_expired().await);
    }
}
