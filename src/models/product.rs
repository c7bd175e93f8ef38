//! Product models.
//!
//! The product schema belongs to the remote API. These types keep the JSON
//! exactly as received and only add read-only accessors on top of it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::primitives::ProductId;
use crate::{Error, Result};

/// Response of the product listing endpoint, kept verbatim.
///
/// The body commonly has a `data` array and pagination metadata such as
/// `total`, but nothing about its shape is enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductListResponse(Value);

impl ProductListResponse {
    /// Wrap a parsed response body.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Products on this page (empty when the body has no `data` array).
    pub fn data(&self) -> &[Value] {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of products matching the query, if reported.
    pub fn total(&self) -> Option<u64> {
        self.0.get("total").and_then(Value::as_u64)
    }

    /// Identifier of the first product on this page.
    pub fn first_id(&self) -> Option<ProductId> {
        self.data()
            .first()
            .and_then(|product| product.get("id"))
            .and_then(Value::as_str)
            .map(ProductId::from)
    }

    /// Borrow the raw JSON body.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the response and return the raw JSON body.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// A partial product update: only the fields set here are sent.
///
/// # Example
///
/// ```
/// use shopware_admin::ProductPatch;
///
/// let patch = ProductPatch::new()
///     .set("name", "Winter Jacket")
///     .set("active", true)
///     .set("stock", 12);
/// assert_eq!(patch.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductPatch(Map<String, Value>);

impl ProductPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, consuming and returning the patch.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field in place. Returns the previous value for that field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Value set for a field, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Number of fields in the patch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ProductPatch {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for ProductPatch {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(Error::InvalidInput(format!(
                "product patch must be a JSON object, got {}",
                other
            ))),
        }
    }
}

/// Confirmation produced locally when an update succeeds without a JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfirmation {
    /// Always `true`; failures are returned as errors.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
    /// The product that was updated.
    pub product_id: ProductId,
}

impl UpdateConfirmation {
    /// Message used when the API answered `204 No Content`.
    pub const NO_CONTENT_MESSAGE: &'static str = "Product updated successfully";
    /// Message used when a success body could not be parsed as JSON.
    pub const UNPARSABLE_BODY_MESSAGE: &'static str =
        "Product updated successfully (no content)";

    pub(crate) fn no_content(product_id: ProductId) -> Self {
        Self {
            success: true,
            message: Self::NO_CONTENT_MESSAGE.to_string(),
            product_id,
        }
    }

    pub(crate) fn unparsable_body(product_id: ProductId) -> Self {
        Self {
            success: true,
            message: Self::UNPARSABLE_BODY_MESSAGE.to_string(),
            product_id,
        }
    }
}

/// Outcome of a product update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdateResult {
    /// The API returned no usable body; a confirmation was synthesized.
    Confirmed(UpdateConfirmation),
    /// The API returned a JSON body, passed through unchanged.
    Body(Value),
}

impl UpdateResult {
    /// The synthesized confirmation, if the API returned no body.
    pub fn confirmation(&self) -> Option<&UpdateConfirmation> {
        match self {
            UpdateResult::Confirmed(confirmation) => Some(confirmation),
            UpdateResult::Body(_) => None,
        }
    }

    /// Status message, when one is available.
    pub fn message(&self) -> Option<&str> {
        match self {
            UpdateResult::Confirmed(confirmation) => Some(&confirmation.message),
            UpdateResult::Body(body) => body.get("message").and_then(Value::as_str),
        }
    }

    /// Convert the result into a JSON value.
    pub fn into_value(self) -> Value {
        match self {
            UpdateResult::Confirmed(confirmation) => serde_json::json!({
                "success": confirmation.success,
                "message": confirmation.message,
                "productId": confirmation.product_id.as_str(),
            }),
            UpdateResult::Body(body) => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_accessors() {
        let response = ProductListResponse::new(json!({
            "total": 2,
            "data": [
                {"id": "a1", "name": "First"},
                {"id": "b2", "name": "Second"}
            ],
            "aggregations": []
        }));

        assert_eq!(response.data().len(), 2);
        assert_eq!(response.total(), Some(2));
        assert_eq!(response.first_id(), Some(ProductId::new("a1")));
    }

    #[test]
    fn test_list_response_without_data() {
        let response = ProductListResponse::new(json!({"errors": []}));
        assert!(response.data().is_empty());
        assert_eq!(response.total(), None);
        assert_eq!(response.first_id(), None);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = ProductPatch::new().set("name", "X").set("active", false);
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"name": "X", "active": false})
        );
    }

    #[test]
    fn test_patch_insert_overwrites_field() {
        let mut patch = ProductPatch::new().set("stock", 1);
        let previous = patch.insert("stock", 5);
        assert_eq!(previous, Some(json!(1)));
        assert_eq!(patch.get("stock"), Some(&json!(5)));
        assert_eq!(patch.len(), 1);
    }

    #[test]
    fn test_patch_from_json_object() {
        let patch = ProductPatch::try_from(json!({"name": "Y"})).unwrap();
        assert_eq!(patch.get("name"), Some(&json!("Y")));
    }

    #[test]
    fn test_patch_rejects_non_object() {
        let err = ProductPatch::try_from(json!(["name"])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_no_content_confirmation_shape() {
        let result = UpdateResult::Confirmed(UpdateConfirmation::no_content("42".into()));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": true,
                "message": "Product updated successfully",
                "productId": "42"
            })
        );
        assert_eq!(result.message(), Some("Product updated successfully"));
    }

    #[test]
    fn test_unparsable_body_confirmation_message() {
        let confirmation = UpdateConfirmation::unparsable_body("7".into());
        assert!(confirmation.success);
        assert_eq!(confirmation.message, "Product updated successfully (no content)");
    }

    #[test]
    fn test_body_result_passes_through() {
        let body = json!({"data": {"id": "42", "name": "X"}});
        let result = UpdateResult::Body(body.clone());
        assert!(result.confirmation().is_none());
        assert_eq!(result.into_value(), body);
    }
}
