use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use contracts::domain::products::dto::CreateProductRequest;

use crate::api::errors::{json_error, json_error_with_product};
use crate::domain::products::service::{CreateProductError, GenerateProductError};
use crate::routes::AppServices;
use crate::shared::platform::PlatformError;

/// GET /api/products
pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.products.list_products().await {
        Ok(list) => Json(list).into_response(),
        Err(err) => {
            tracing::error!("Failed to fetch products: {}", err);
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products")
        }
    }
}

/// POST /api/products
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<CreateProductRequest>,
) -> Response {
    match services.products.create_product(request).await {
        Ok(outcome) => Json(json!({
            "product": outcome.product,
            "variants": outcome.variants,
        }))
        .into_response(),
        Err(err) => {
            tracing::error!("Product create workflow failed: {}", err);
            match err {
                CreateProductError::Create(source) => {
                    json_error(workflow_status(&source), "Failed to create product.")
                }
                CreateProductError::MissingProduct => json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "No product returned from productCreate.",
                ),
                CreateProductError::MissingVariant { product } => json_error_with_product(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Product created but no variant found.",
                    product,
                ),
                CreateProductError::Update { product, source } => json_error_with_product(
                    workflow_status(&source),
                    "Failed to update variant.",
                    product,
                ),
            }
        }
    }
}

/// POST /api/products/generate
pub async fn generate_product(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.products.generate_product().await {
        Ok(outcome) => Json(json!({
            "product": outcome.product,
            "variant": outcome.variant,
        }))
        .into_response(),
        Err(err) => {
            tracing::error!("Product generate workflow failed: {}", err);
            let message = match err {
                GenerateProductError::Create(_) => "Failed to create product",
                GenerateProductError::Update(_) => "Failed to update variant",
            };
            json_error(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

/// Validation failures reported by the platform surface as 400, every
/// other failure as 500.
fn workflow_status(err: &PlatformError) -> StatusCode {
    if err.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
