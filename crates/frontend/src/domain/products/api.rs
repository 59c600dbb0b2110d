use contracts::domain::products::dto::{
    ApiError, CreateProductRequest, GenerateProductResponse, ProductListResponse,
    ProductWorkflowResponse,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, RequestInit, RequestMode, Response};

const API_BASE: &str = "http://localhost:3000";

/// Fetch the full product list for the Products tab.
pub async fn fetch_products() -> Result<ProductListResponse, String> {
    let window = window().ok_or("No window object")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        web_sys::Request::new_with_str_and_init(&format!("{}/api/products", API_BASE), &opts)
            .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Run the create-then-update workflow. Failure responses still carry
/// partial payloads, so the body is parsed for every status.
pub async fn create_product(
    request: CreateProductRequest,
) -> Result<ProductWorkflowResponse, String> {
    let window = window().ok_or("No window object")?;

    let body = serde_json::to_string(&request).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init(
        &format!("{}/api/products", API_BASE),
        &opts,
    )
    .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Run the snowboard generator.
pub async fn generate_product() -> Result<GenerateProductResponse, String> {
    let window = window().ok_or("No window object")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(
        &format!("{}/api/products/generate", API_BASE),
        &opts,
    )
    .map_err(|e| format!("Failed to create request: {:?}", e))?;

    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("Failed to set header: {:?}", e))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response_value.dyn_into().map_err(|_| "Not a Response")?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| format!("Failed to parse JSON: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to get JSON: {:?}", e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// Pull the `error` field out of a failure body, falling back to the
/// HTTP status.
async fn error_message(response: &Response) -> String {
    let status = response.status();
    if let Ok(promise) = response.json() {
        if let Ok(json) = wasm_bindgen_futures::JsFuture::from(promise).await {
            if let Ok(err) = serde_wasm_bindgen::from_value::<ApiError>(json) {
                return err.error;
            }
        }
    }
    format!("HTTP error: {}", status)
}
