use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::StatusCode;
use serde_json::{json, Value};

use backend::domain::products::service::ProductService;
use backend::routes::{configure_routes, AppServices};
use backend::shared::platform::AdminApiClient;

/// Fake Admin GraphQL endpoint. Serves the queued responses in order
/// and records every request body and access token it receives.
struct StubPlatform {
    endpoint: String,
    requests: Arc<Mutex<Vec<Value>>>,
    tokens: Arc<Mutex<Vec<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubPlatform {
    async fn spawn(responses: Vec<(u16, Value)>) -> Self {
        let queue = Arc::new(Mutex::new(VecDeque::from(responses)));
        let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
        let tokens: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let queue_for_app = queue.clone();
        let requests_for_app = requests.clone();
        let tokens_for_app = tokens.clone();
        let app = Router::new().route(
            "/graphql.json",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let queue = queue_for_app.clone();
                let requests = requests_for_app.clone();
                let tokens = tokens_for_app.clone();
                async move {
                    requests.lock().unwrap().push(body);
                    tokens.lock().unwrap().push(
                        headers
                            .get("X-Shopify-Access-Token")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default()
                            .to_string(),
                    );
                    let (status, payload) = queue.lock().unwrap().pop_front().unwrap_or((
                        500,
                        json!({ "errors": [{ "message": "stub queue exhausted" }] }),
                    ));
                    (
                        axum::http::StatusCode::from_u16(status).unwrap(),
                        Json(payload),
                    )
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let endpoint = format!("http://{}/graphql.json", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint,
            requests,
            tokens,
            handle,
        }
    }

    fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn request(&self, index: usize) -> Value {
        self.requests.lock().unwrap()[index].clone()
    }

    fn token(&self, index: usize) -> String {
        self.tokens.lock().unwrap()[index].clone()
    }
}

impl Drop for StubPlatform {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Same router as prod, pointed at the stub platform and bound to
    /// an ephemeral port.
    async fn spawn(platform_endpoint: &str) -> Self {
        let platform =
            AdminApiClient::with_endpoint(platform_endpoint.to_string(), "test-token".to_string());
        let services = Arc::new(AppServices {
            products: ProductService::new(platform),
        });
        let app = configure_routes(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn created_product(id: &str, title: &str, variant_id: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "handle": title.to_lowercase().replace(' ', "-"),
        "status": "ACTIVE",
        "variants": {
            "edges": [
                { "node": { "id": variant_id, "sku": "", "price": "0.00" } }
            ]
        }
    })
}

fn create_envelope(product: Value) -> Value {
    json!({ "data": { "productCreate": { "product": product, "userErrors": [] } } })
}

fn update_envelope(variants: Value) -> Value {
    json!({
        "data": {
            "productVariantsBulkUpdate": { "productVariants": variants, "userErrors": [] }
        }
    })
}

#[tokio::test]
async fn create_product_runs_create_then_update() {
    let product = created_product(
        "gid://shopify/Product/1",
        "Test Product",
        "gid://shopify/ProductVariant/11",
    );
    let stub = StubPlatform::spawn(vec![
        (200, create_envelope(product)),
        (
            200,
            update_envelope(json!([
                { "id": "gid://shopify/ProductVariant/11", "price": "0.00", "sku": "SKU-1" }
            ])),
        ),
    ])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "title": "Test Product", "status": "ACTIVE", "sku": "SKU-1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["product"]["id"], "gid://shopify/Product/1");
    assert_eq!(body["variants"][0]["sku"], "SKU-1");

    assert_eq!(stub.hits(), 2);
    assert_eq!(stub.token(0), "test-token");

    let create = stub.request(0);
    assert!(create["query"].as_str().unwrap().contains("productCreate"));
    assert_eq!(create["variables"]["product"]["title"], "Test Product");
    assert_eq!(create["variables"]["product"]["status"], "ACTIVE");

    let update = stub.request(1);
    assert_eq!(update["variables"]["productId"], "gid://shopify/Product/1");
    assert_eq!(
        update["variables"]["variants"][0]["id"],
        "gid://shopify/ProductVariant/11"
    );
    assert_eq!(
        update["variables"]["variants"][0]["inventoryItem"]["sku"],
        "SKU-1"
    );
}

#[tokio::test]
async fn create_product_reports_validation_errors_as_400() {
    let stub = StubPlatform::spawn(vec![(
        200,
        json!({
            "data": {
                "productCreate": {
                    "product": null,
                    "userErrors": [
                        { "field": ["title"], "message": "Title can't be blank" }
                    ]
                }
            }
        }),
    )])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "title": "", "status": "DRAFT", "sku": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to create product.");
    // The variant update must not run after a failed create
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn create_product_maps_graphql_errors_to_500() {
    let stub = StubPlatform::spawn(vec![(
        200,
        json!({ "errors": [{ "message": "Throttled" }] }),
    )])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "title": "Test Product", "status": "ACTIVE", "sku": "SKU-1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to create product.");
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn create_product_without_product_node_is_500() {
    let stub = StubPlatform::spawn(vec![(
        200,
        json!({ "data": { "productCreate": { "product": null, "userErrors": [] } } }),
    )])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "title": "Test Product", "status": "ACTIVE", "sku": "SKU-1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "No product returned from productCreate.");
}

#[tokio::test]
async fn create_product_without_variant_echoes_the_product() {
    let product = json!({
        "id": "gid://shopify/Product/7",
        "title": "Variantless",
        "status": "ACTIVE",
        "variants": { "edges": [] }
    });
    let stub = StubPlatform::spawn(vec![(200, create_envelope(product))]).await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "title": "Variantless", "status": "ACTIVE", "sku": "SKU-7" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Product created but no variant found.");
    assert_eq!(body["product"]["id"], "gid://shopify/Product/7");
    assert_eq!(stub.hits(), 1);
}

#[tokio::test]
async fn variant_update_failure_echoes_the_created_product() {
    let product = created_product(
        "gid://shopify/Product/3",
        "Half Done",
        "gid://shopify/ProductVariant/31",
    );
    let stub = StubPlatform::spawn(vec![
        (200, create_envelope(product)),
        (
            200,
            json!({
                "data": {
                    "productVariantsBulkUpdate": {
                        "productVariants": null,
                        "userErrors": [
                            { "field": ["variants"], "message": "SKU is already taken" }
                        ]
                    }
                }
            }),
        ),
    ])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({ "title": "Half Done", "status": "ACTIVE", "sku": "DUPE" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to update variant.");
    assert_eq!(body["product"]["id"], "gid://shopify/Product/3");
    assert_eq!(stub.hits(), 2);
}

#[tokio::test]
async fn list_products_flattens_first_variants() {
    let stub = StubPlatform::spawn(vec![(
        200,
        json!({
            "data": {
                "products": {
                    "edges": [
                        {
                            "node": {
                                "id": "gid://shopify/Product/1",
                                "title": "Board A",
                                "status": "ACTIVE",
                                "variants": {
                                    "edges": [
                                        { "node": { "id": "gid://shopify/ProductVariant/11", "sku": "SKU-A" } }
                                    ]
                                }
                            }
                        },
                        {
                            "node": {
                                "id": "gid://shopify/Product/2",
                                "title": "Board B",
                                "status": "DRAFT",
                                "variants": { "edges": [] }
                            }
                        }
                    ]
                }
            }
        }),
    )])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/products", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["products"][0]["title"], "Board A");
    assert_eq!(body["products"][0]["variant"]["sku"], "SKU-A");
    assert!(body["products"][1].get("variant").is_none());

    let query = stub.request(0);
    assert!(query["query"].as_str().unwrap().contains("getAllProducts"));
    assert_eq!(query["variables"]["first"], 250);
}

#[tokio::test]
async fn list_products_maps_transport_failures_to_500() {
    let stub = StubPlatform::spawn(vec![(502, json!({ "error": "bad gateway" }))]).await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/products", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to fetch products");
}

#[tokio::test]
async fn generate_product_prices_the_variant_at_100() {
    let product = created_product(
        "gid://shopify/Product/9",
        "Green Snowboard",
        "gid://shopify/ProductVariant/91",
    );
    let stub = StubPlatform::spawn(vec![
        (200, create_envelope(product)),
        (
            200,
            update_envelope(json!([
                {
                    "id": "gid://shopify/ProductVariant/91",
                    "price": "100.00",
                    "barcode": null,
                    "createdAt": "2025-01-01T00:00:00Z"
                }
            ])),
        ),
    ])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products/generate", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["product"]["id"], "gid://shopify/Product/9");
    assert_eq!(body["variant"][0]["price"], "100.00");

    assert_eq!(stub.hits(), 2);
    let create = stub.request(0);
    assert!(create["query"].as_str().unwrap().contains("populateProduct"));
    let title = create["variables"]["product"]["title"].as_str().unwrap();
    assert!(title.ends_with(" Snowboard"), "unexpected title {title}");

    let update = stub.request(1);
    assert_eq!(update["variables"]["variants"][0]["price"], "100.00");
}

#[tokio::test]
async fn generate_product_failures_are_internal_errors() {
    let stub = StubPlatform::spawn(vec![(
        200,
        json!({ "errors": [{ "message": "Throttled" }] }),
    )])
    .await;
    let srv = TestServer::spawn(&stub.endpoint).await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/products/generate", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to create product");
}
