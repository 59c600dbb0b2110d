use std::sync::Arc;

use axum::extract::Extension;
use axum::http::{header, Method};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers::products;
use crate::api::middleware::request_logger;
use crate::domain::products::service::ProductService;

/// Services shared by every handler through an [`Extension`] layer.
/// Tests build their own instance pointed at a local stub platform.
pub struct AppServices {
    pub products: ProductService,
}

/// Router over the product JSON API, with the built frontend served
/// from `dist` for every other path.
pub fn configure_routes(services: Arc<AppServices>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products/generate", post(products::generate_product))
        .fallback_service(ServeDir::new("dist"))
        .layer(Extension(services))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
