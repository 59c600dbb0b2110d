use serde::{Deserialize, Serialize};

/// Product status values accepted by the creation form. Serialized with
/// the exact uppercase spelling the remote platform expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "DRAFT")]
    Draft,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Draft => "DRAFT",
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

/// First variant of a listed product, when the product has one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSummary {
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
}

/// Flat view model for one row of the product list. The status comes
/// through as whatever string the remote issued, not just the two values
/// the creation form offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantSummary>,
}

/// Body of GET /api/products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductSummary>,
    pub total_count: usize,
}

/// Form fields submitted by the create-product page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    #[serde(default)]
    pub status: ProductStatus,
    pub sku: String,
}

/// Body of POST /api/products, success and failure alike. Mirrors the
/// page state: any subset of the three fields can be present (a failed
/// variant update still echoes the created product).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductWorkflowResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Success body of POST /api/products/generate: the raw remote payloads
/// of the create and the follow-up variant update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateProductResponse {
    pub product: serde_json::Value,
    pub variant: serde_json::Value,
}

/// Generic failure body used by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&ProductStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&ProductStatus::Draft).unwrap(),
            "\"DRAFT\""
        );
    }

    #[test]
    fn product_summary_without_variant_deserializes() {
        let json = r#"{
            "id": "gid://shopify/Product/1",
            "title": "Blue Snowboard",
            "status": "ACTIVE"
        }"#;

        let product: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "gid://shopify/Product/1");
        assert!(product.variant.is_none());
    }

    #[test]
    fn product_summary_variant_keeps_missing_sku() {
        let json = r#"{
            "id": "gid://shopify/Product/2",
            "title": "Red Snowboard",
            "status": "DRAFT",
            "variant": { "id": "gid://shopify/ProductVariant/7" }
        }"#;

        let product: ProductSummary = serde_json::from_str(json).unwrap();
        let variant = product.variant.unwrap();
        assert_eq!(variant.id, "gid://shopify/ProductVariant/7");
        assert!(variant.sku.is_none());
    }

    #[test]
    fn workflow_response_omits_absent_fields() {
        let response = ProductWorkflowResponse {
            error: Some("Failed to update variant.".to_string()),
            product: Some(serde_json::json!({ "id": "gid://shopify/Product/3" })),
            variants: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"], "Failed to update variant.");
        assert!(value.get("variants").is_none());
    }

    #[test]
    fn create_request_defaults_status_to_active() {
        let request: CreateProductRequest =
            serde_json::from_str(r#"{ "title": "Board", "sku": "SKU-1" }"#).unwrap();
        assert_eq!(request.status, ProductStatus::Active);
    }
}
