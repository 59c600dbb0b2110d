//! GraphQL documents and response shapes for the Admin API.
//!
//! The field selections and variable shapes in these documents are part
//! of the contract with the remote schema and must not be altered.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Create used by the product form page. Selects sku and price on the
/// default variant plus user errors.
pub const CREATE_PRODUCT_MUTATION: &str = r#"
  mutation createProduct($product: ProductCreateInput!) {
    productCreate(product: $product) {
      product {
        id
        title
        handle
        status
        variants(first: 10) {
          edges {
            node {
              id
              sku
              price
            }
          }
        }
      }
      userErrors {
        field
        message
      }
    }
  }
"#;

/// Bulk variant update used by the product form page. The submitted SKU
/// travels through the variant's inventory item.
pub const UPDATE_VARIANT_MUTATION: &str = r#"
  mutation shopifyRemixTemplateUpdateVariant($productId: ID!, $variants: [ProductVariantsBulkInput!]!) {
    productVariantsBulkUpdate(productId: $productId, variants: $variants) {
      productVariants {
        id
        price
        barcode
        createdAt
        sku
      }
      userErrors {
        field
        message
      }
    }
  }
"#;

/// First-N product listing for the list page.
pub const GET_ALL_PRODUCTS_QUERY: &str = r#"
  query getAllProducts($first: Int!) {
    products(first: $first) {
      edges {
        node {
          id
          title
          status
          variants(first:1) {
            edges {
              node {
                id
                sku
              }
            }
          }
        }
      }
    }
  }
"#;

/// Create used by the generator action. Selects no user errors.
pub const POPULATE_PRODUCT_MUTATION: &str = r#"
  mutation populateProduct($product: ProductCreateInput!) {
    productCreate(product: $product) {
      product {
        id
        title
        handle
        status
        variants(first: 10) {
          edges {
            node {
              id
              price
              barcode
              createdAt
            }
          }
        }
      }
    }
  }
"#;

/// Bulk variant update used by the generator action. Selects no user
/// errors.
pub const POPULATE_UPDATE_VARIANTS_MUTATION: &str = r#"
  mutation shopifyRemixTemplateUpdateVariant($productId: ID!, $variants: [ProductVariantsBulkInput!]!) {
    productVariantsBulkUpdate(productId: $productId, variants: $variants) {
      productVariants {
        id
        price
        barcode
        createdAt
      }
    }
  }
"#;

/// Top-level GraphQL response envelope. `data` stays a raw value here;
/// each caller decodes the operation payload it expects.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlEnvelope {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Validation failure returned inside a successful response. The field
/// path can be a string, an array, or absent, so it stays raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserError {
    #[serde(default)]
    pub field: Option<serde_json::Value>,
    pub message: String,
}

/// Payload of `productCreate`. The product node is kept as raw JSON so
/// the pages receive the exact remote payload; `userErrors` defaults to
/// empty for the generator document, which does not select it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreateData {
    #[serde(rename = "productCreate")]
    pub product_create: ProductCreatePayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreatePayload {
    #[serde(default)]
    pub product: Option<serde_json::Value>,
    #[serde(rename = "userErrors", default)]
    pub user_errors: Vec<UserError>,
}

/// Payload of `productVariantsBulkUpdate`.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantsBulkUpdateData {
    #[serde(rename = "productVariantsBulkUpdate")]
    pub variants_bulk_update: VariantsBulkUpdatePayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantsBulkUpdatePayload {
    #[serde(rename = "productVariants", default)]
    pub product_variants: Option<serde_json::Value>,
    #[serde(rename = "userErrors", default)]
    pub user_errors: Vec<UserError>,
}

/// Payload of `products(first: $first)`, typed down to the variant nodes
/// because the list page flattens it instead of echoing raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsData {
    pub products: Connection<ProductListNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListNode {
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub variants: Option<Connection<VariantListNode>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantListNode {
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
}

/// First variant identifier under `variants.edges[0].node.id` of a raw
/// product node, if present.
pub fn first_variant_id(product: &serde_json::Value) -> Option<String> {
    product
        .get("variants")?
        .get("edges")?
        .get(0)?
        .get("node")?
        .get("id")?
        .as_str()
        .map(str::to_owned)
}
