use contracts::domain::products::dto::{
    CreateProductRequest, ProductListResponse, ProductSummary, VariantSummary,
};
use rand::seq::SliceRandom;
use serde_json::json;
use thiserror::Error;

use crate::shared::platform::graphql::{
    self, ProductCreateData, ProductsData, VariantsBulkUpdateData,
};
use crate::shared::platform::{AdminApiClient, PlatformError};

/// Largest page the Admin API serves in a single products query.
const REMOTE_PAGE_MAX: u32 = 250;

/// Colors the generator draws snowboard titles from.
const GENERATOR_COLORS: [&str; 4] = ["Red", "Orange", "Yellow", "Green"];

/// Failure of the create-then-update workflow. Steps past the create
/// carry the already-created product so callers can still show it.
#[derive(Debug, Error)]
pub enum CreateProductError {
    #[error("product create failed: {0}")]
    Create(#[source] PlatformError),

    #[error("no product returned by the create mutation")]
    MissingProduct,

    #[error("product created but it has no variant")]
    MissingVariant { product: serde_json::Value },

    #[error("variant update failed: {source}")]
    Update {
        product: serde_json::Value,
        #[source]
        source: PlatformError,
    },
}

/// Failure of the demo product generator.
#[derive(Debug, Error)]
pub enum GenerateProductError {
    #[error("product create failed: {0}")]
    Create(#[source] PlatformError),

    #[error("variant update failed: {0}")]
    Update(#[source] PlatformError),
}

pub struct CreateProductOutcome {
    /// Product node exactly as the create mutation returned it.
    pub product: serde_json::Value,
    /// Variant list exactly as the update mutation returned it.
    pub variants: serde_json::Value,
}

pub struct GenerateProductOutcome {
    pub product: serde_json::Value,
    pub variant: serde_json::Value,
}

/// Product workflows behind the page handlers. Each call maps one page
/// action to one or two Admin API operations and stops at the first
/// failed step.
pub struct ProductService {
    platform: AdminApiClient,
}

impl ProductService {
    pub fn new(platform: AdminApiClient) -> Self {
        Self { platform }
    }

    /// Fetch up to [`REMOTE_PAGE_MAX`] products in one query and flatten
    /// each edge into a row for the list page.
    pub async fn list_products(&self) -> Result<ProductListResponse, PlatformError> {
        let data: ProductsData = self
            .platform
            .execute(
                graphql::GET_ALL_PRODUCTS_QUERY,
                json!({ "first": REMOTE_PAGE_MAX }),
            )
            .await?;

        let products: Vec<ProductSummary> = data
            .products
            .edges
            .into_iter()
            .map(|edge| {
                let node = edge.node;
                let variant = node
                    .variants
                    .and_then(|variants| variants.edges.into_iter().next())
                    .map(|edge| VariantSummary {
                        id: edge.node.id,
                        sku: edge.node.sku,
                    });
                ProductSummary {
                    id: node.id,
                    title: node.title,
                    status: node.status,
                    variant,
                }
            })
            .collect();

        let total_count = products.len();
        tracing::info!("Fetched {} products from the Admin API", total_count);

        Ok(ProductListResponse {
            products,
            total_count,
        })
    }

    /// Create a product from the submitted fields, then write the
    /// submitted SKU onto its first variant.
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<CreateProductOutcome, CreateProductError> {
        let variables = json!({
            "product": {
                "title": request.title,
                "status": request.status.as_str(),
            }
        });

        let data: ProductCreateData = self
            .platform
            .execute(graphql::CREATE_PRODUCT_MUTATION, variables)
            .await
            .map_err(CreateProductError::Create)?;

        let payload = data.product_create;
        if !payload.user_errors.is_empty() {
            return Err(CreateProductError::Create(PlatformError::UserErrors(
                payload.user_errors,
            )));
        }
        let product = payload.product.ok_or(CreateProductError::MissingProduct)?;

        let Some(variant_id) = graphql::first_variant_id(&product) else {
            return Err(CreateProductError::MissingVariant { product });
        };

        let variables = json!({
            "productId": product["id"],
            "variants": [{
                "id": variant_id,
                "inventoryItem": { "sku": request.sku },
            }],
        });

        let update: VariantsBulkUpdateData = match self
            .platform
            .execute(graphql::UPDATE_VARIANT_MUTATION, variables)
            .await
        {
            Ok(update) => update,
            Err(source) => return Err(CreateProductError::Update { product, source }),
        };

        let payload = update.variants_bulk_update;
        if !payload.user_errors.is_empty() {
            return Err(CreateProductError::Update {
                product,
                source: PlatformError::UserErrors(payload.user_errors),
            });
        }
        let variants = payload.product_variants.unwrap_or(serde_json::Value::Null);

        Ok(CreateProductOutcome { product, variants })
    }

    /// Create a "{Color} Snowboard" product with a random color, then
    /// price its first variant at 100.00.
    pub async fn generate_product(&self) -> Result<GenerateProductOutcome, GenerateProductError> {
        let color = GENERATOR_COLORS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or("Red");

        let variables = json!({
            "product": {
                "title": format!("{} Snowboard", color),
            }
        });

        let data: ProductCreateData = self
            .platform
            .execute(graphql::POPULATE_PRODUCT_MUTATION, variables)
            .await
            .map_err(GenerateProductError::Create)?;

        let product = data.product_create.product.ok_or_else(|| {
            GenerateProductError::Create(PlatformError::MissingNode("productCreate.product"))
        })?;
        let variant_id = graphql::first_variant_id(&product).ok_or_else(|| {
            GenerateProductError::Create(PlatformError::MissingNode(
                "productCreate.product.variants",
            ))
        })?;

        let variables = json!({
            "productId": product["id"],
            "variants": [{ "id": variant_id, "price": "100.00" }],
        });

        let update: VariantsBulkUpdateData = self
            .platform
            .execute(graphql::POPULATE_UPDATE_VARIANTS_MUTATION, variables)
            .await
            .map_err(GenerateProductError::Update)?;

        let variant = update
            .variants_bulk_update
            .product_variants
            .unwrap_or(serde_json::Value::Null);

        Ok(GenerateProductOutcome { product, variant })
    }
}
