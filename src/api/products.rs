//! Products service for listing and updating products.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::Serialize;

use crate::client::{ClientInner, RawResponse};
use crate::models::{ProductId, ProductListResponse, ProductPatch, UpdateConfirmation, UpdateResult};
use crate::{Error, Result};

/// Path of the product collection, relative to the base URL.
const PRODUCT_PATH: &str = "/api/product";

/// Default page size used by [`ProductsService::list_default`].
pub const DEFAULT_LIMIT: i64 = 10;

/// First page number; pages are 1-based.
pub const FIRST_PAGE: i64 = 1;

/// Service for product operations.
///
/// # Example
///
/// ```no_run
/// use shopware_admin::ProductPatch;
///
/// # async fn example(client: shopware_admin::ShopwareClient) -> shopware_admin::Result<()> {
/// // First page, ten products
/// let page = client.products().list_default().await?;
///
/// for product in page.data() {
///     println!("{}: {}", product["id"], product["name"]);
/// }
///
/// // Deactivate the first one, leaving every other field untouched
/// if let Some(id) = page.first_id() {
///     client.products().update(id, ProductPatch::new().set("active", false)).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing products.
///
/// Values are sent as-is; the API decides what is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductsQuery {
    /// Number of products per page
    pub limit: i64,
    /// Page number, starting at 1
    pub page: i64,
}

impl Default for ProductsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: FIRST_PAGE,
        }
    }
}

impl ProductsQuery {
    /// Create a query for the given page size and page.
    pub fn new(limit: i64, page: i64) -> Self {
        Self { limit, page }
    }

    /// The query for the following page.
    pub fn next_page(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List products.
    ///
    /// # Arguments
    ///
    /// * `limit` - Number of products per page
    /// * `page` - Page number, starting at 1
    ///
    /// The response body is returned exactly as the API sent it.
    pub async fn list(&self, limit: i64, page: i64) -> Result<ProductListResponse> {
        self.list_with_query(&ProductsQuery::new(limit, page)).await
    }

    /// List the first page of ten products.
    pub async fn list_default(&self) -> Result<ProductListResponse> {
        self.list_with_query(&ProductsQuery::default()).await
    }

    /// List products using a prepared query.
    pub async fn list_with_query(&self, query: &ProductsQuery) -> Result<ProductListResponse> {
        let body = self.inner.get_with_query(PRODUCT_PATH, query).await?;
        Ok(ProductListResponse::new(body))
    }

    /// Partially update a product.
    ///
    /// Only the fields in `fields` are sent; the API leaves all other fields
    /// of the product as they are.
    ///
    /// The Admin API answers a successful update with `204 No Content`. In
    /// that case a [`UpdateConfirmation`] is returned instead of an empty
    /// body. A JSON body, if the API sends one, is returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `product_id` is empty.
    /// - [`Error::Api`] if the API answers with a non-success status.
    pub async fn update(
        &self,
        product_id: impl Into<ProductId>,
        fields: impl Into<ProductPatch>,
    ) -> Result<UpdateResult> {
        let product_id = product_id.into();
        if product_id.is_empty() {
            return Err(Error::InvalidInput("product id must not be empty".to_string()));
        }
        let fields = fields.into();

        let response = self
            .inner
            .patch(&product_path(&product_id), &fields)
            .await?;

        Ok(interpret_update(response, product_id))
    }
}

/// Path of a single product; the id is percent-encoded as one path segment.
fn product_path(product_id: &ProductId) -> String {
    format!("{}/{}", PRODUCT_PATH, urlencoding::encode(product_id.as_str()))
}

fn interpret_update(response: RawResponse, product_id: ProductId) -> UpdateResult {
    if response.status == StatusCode::NO_CONTENT {
        return UpdateResult::Confirmed(UpdateConfirmation::no_content(product_id));
    }

    match serde_json::from_str(&response.body) {
        Ok(body) => UpdateResult::Body(body),
        Err(e) => {
            tracing::debug!(error = %e, "update response body is not JSON");
            UpdateResult::Confirmed(UpdateConfirmation::unparsable_body(product_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(status: StatusCode, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_default_query() {
        let query = ProductsQuery::default();
        assert_eq!(query.limit, 10);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_next_page() {
        let query = ProductsQuery::new(25, 3).next_page();
        assert_eq!(query, ProductsQuery::new(25, 4));
    }

    #[test]
    fn test_product_path_keeps_hex_ids() {
        let id = ProductId::new("0190a8d4c9e37a3e8b4b1c7f1d2e3f40");
        assert_eq!(product_path(&id), "/api/product/0190a8d4c9e37a3e8b4b1c7f1d2e3f40");
    }

    #[test]
    fn test_product_path_encodes_reserved_characters() {
        let id = ProductId::new("a/b?c=d#e f");
        assert_eq!(product_path(&id), "/api/product/a%2Fb%3Fc%3Dd%23e%20f");
    }

    #[test]
    fn test_no_content_is_confirmed() {
        let result = interpret_update(raw(StatusCode::NO_CONTENT, ""), "42".into());
        assert_eq!(
            result.confirmation(),
            Some(&UpdateConfirmation {
                success: true,
                message: "Product updated successfully".to_string(),
                product_id: "42".into(),
            })
        );
    }

    #[test]
    fn test_empty_ok_body_falls_back() {
        let result = interpret_update(raw(StatusCode::OK, ""), "42".into());
        assert_eq!(
            result.message(),
            Some("Product updated successfully (no content)")
        );
    }

    #[test]
    fn test_json_body_passes_through() {
        let result = interpret_update(
            raw(StatusCode::OK, r#"{"data":{"id":"42","name":"X"}}"#),
            "42".into(),
        );
        assert_eq!(result, UpdateResult::Body(json!({"data": {"id": "42", "name": "X"}})));
    }
}
