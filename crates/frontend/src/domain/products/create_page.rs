use contracts::domain::products::dto::{
    CreateProductRequest, ProductStatus, ProductWorkflowResponse,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::app::AppTab;
use crate::shared::json_viewer::JsonViewer;

#[component]
pub fn CreateProductPage(set_active_tab: WriteSignal<AppTab>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (status, set_status) = signal(ProductStatus::Active);
    let (sku, set_sku) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (result, set_result) = signal(None::<ProductWorkflowResponse>);
    let (toast, set_toast) = signal(String::new());

    let submit = move |_| {
        if is_submitting.get() {
            return;
        }
        set_is_submitting.set(true);
        let request = CreateProductRequest {
            title: title.get(),
            status: status.get(),
            sku: sku.get(),
        };
        spawn_local(async move {
            match api::create_product(request).await {
                Ok(resp) => {
                    if resp.product.is_some() && resp.error.is_none() {
                        set_toast.set("Product created successfully!".to_string());
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(5000).await;
                            set_toast.set(String::new());
                        });
                    }
                    set_result.set(Some(resp));
                }
                Err(e) => {
                    // Transport failures land in the same banner as
                    // workflow errors
                    set_result.set(Some(ProductWorkflowResponse {
                        error: Some(e),
                        ..Default::default()
                    }));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page create-product-page">
            <h2 class="page-title">"Create a New Product"</h2>
            <div class="card">
                <h3 class="section-title">
                    "Enter Product Details(it will show a json of the product created)"
                </h3>

                {move || {
                    let msg = toast.get();
                    (!msg.is_empty()).then(|| view! { <div class="toast">{msg}</div> })
                }}
                {move || {
                    result
                        .get()
                        .and_then(|resp| resp.error)
                        .map(|error| view! { <div class="error-banner">{error}</div> })
                }}

                <div class="form">
                    <label class="form-field">
                        <span class="form-label">"Title"</span>
                        <input
                            type="text"
                            autocomplete="off"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Status"</span>
                        <select on:change=move |ev| {
                            set_status
                                .set(
                                    match event_target_value(&ev).as_str() {
                                        "DRAFT" => ProductStatus::Draft,
                                        _ => ProductStatus::Active,
                                    },
                                )
                        }>
                            <option
                                value="ACTIVE"
                                selected=move || status.get() == ProductStatus::Active
                            >
                                "Active"
                            </option>
                            <option
                                value="DRAFT"
                                selected=move || status.get() == ProductStatus::Draft
                            >
                                "Draft"
                            </option>
                        </select>
                    </label>
                    <label class="form-field">
                        <span class="form-label">"SKU"</span>
                        <input
                            type="text"
                            autocomplete="off"
                            prop:value=move || sku.get()
                            on:input=move |ev| set_sku.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="button-row">
                        <button
                            class="button"
                            on:click=move |_| set_active_tab.set(AppTab::Products)
                        >
                            "Back to Home"
                        </button>
                        <button
                            class="button button--primary"
                            on:click=submit
                            disabled=move || is_submitting.get()
                        >
                            {move || if is_submitting.get() { "Creating..." } else { "Create Product" }}
                        </button>
                    </div>
                </div>

                {move || {
                    result.get().map(|resp| {
                        view! {
                            <>
                                {resp.product.as_ref().map(|product| {
                                    let json = serde_json::to_string_pretty(product)
                                        .unwrap_or_else(|_| "{}".to_string());
                                    view! {
                                        <JsonViewer
                                            json_content=json
                                            title="Created Product Data".to_string()
                                        />
                                    }
                                })}
                                {resp.variants.as_ref().map(|variants| {
                                    let json = serde_json::to_string_pretty(variants)
                                        .unwrap_or_else(|_| "{}".to_string());
                                    view! {
                                        <JsonViewer
                                            json_content=json
                                            title="Updated Variant Data".to_string()
                                        />
                                    }
                                })}
                            </>
                        }
                    })
                }}
            </div>
        </div>
    }
}
