use contracts::domain::products::dto::{GenerateProductResponse, ProductSummary};
use contracts::shared::paging::{clamp_page, page_window, total_pages};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::app::AppTab;
use crate::shared::gid::product_admin_id;
use crate::shared::json_viewer::JsonViewer;
use crate::shared::pagination_controls::PaginationControls;

/// Window size for the client-side pagination of the product list.
const ITEMS_PER_PAGE: usize = 5;

#[component]
pub fn ProductListPage(set_active_tab: WriteSignal<AppTab>) -> impl IntoView {
    let (products, set_products) = signal(Vec::<ProductSummary>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(String::new());
    let (current_page, set_current_page) = signal(0usize);
    let (generated, set_generated) = signal(None::<GenerateProductResponse>);
    let (is_generating, set_is_generating) = signal(false);
    let (toast, set_toast) = signal(String::new());

    let load_products = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    set_error_msg.set(String::new());
                    set_products.set(list.products);
                }
                Err(e) => set_error_msg.set(e),
            }
            set_is_loading.set(false);
        });
    };

    Effect::new(move || {
        load_products();
    });

    let generate = move |_| {
        if is_generating.get() {
            return;
        }
        set_is_generating.set(true);
        spawn_local(async move {
            match api::generate_product().await {
                Ok(resp) => {
                    set_error_msg.set(String::new());
                    set_generated.set(Some(resp));
                    set_toast.set("Product created".to_string());
                    spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(5000).await;
                        set_toast.set(String::new());
                    });
                    // Pull the list again so the new product shows up
                    load_products();
                }
                Err(e) => set_error_msg.set(e),
            }
            set_is_generating.set(false);
        });
    };

    let total = move || products.with(|p| p.len());
    let pages = move || total_pages(total(), ITEMS_PER_PAGE);
    let paged_products = move || {
        products.with(|p| {
            let page = clamp_page(current_page.get(), p.len(), ITEMS_PER_PAGE);
            let (start, end) = page_window(p.len(), page, ITEMS_PER_PAGE);
            p[start..end].to_vec()
        })
    };

    view! {
        <div class="page product-list-page">
            <div class="page-header">
                <h2 class="page-title">"Product List 🎉"</h2>
                <button
                    class="button"
                    on:click=generate
                    disabled=move || is_generating.get()
                >
                    {move || if is_generating.get() { "Generating..." } else { "Generate a product" }}
                </button>
            </div>
            <p class="page-description">
                "This version fetches all products and displays only 5 at a time. Use the pagination buttons to navigate through the products."
            </p>

            {move || {
                let msg = toast.get();
                (!msg.is_empty()).then(|| view! { <div class="toast">{msg}</div> })
            }}
            {move || {
                let msg = error_msg.get();
                (!msg.is_empty()).then(|| view! { <div class="error-banner">{msg}</div> })
            }}

            <h3 class="section-title">"Current Products"</h3>
            {move || {
                if is_loading.get() {
                    view! { <p class="empty-state">"Loading products..."</p> }.into_any()
                } else if total() == 0 {
                    view! { <p class="empty-state">"No products yet. Generate one to get started."</p> }
                        .into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Status"</th>
                                    <th>"SKU"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {paged_products()
                                    .into_iter()
                                    .map(|product| {
                                        let sku = product
                                            .variant
                                            .as_ref()
                                            .and_then(|v| v.sku.clone())
                                            .unwrap_or_else(|| "N/A".to_string());
                                        view! {
                                            <tr>
                                                <td class="data-table__title">{product.title}</td>
                                                <td>{product.status}</td>
                                                <td>{sku}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}

            <PaginationControls
                current_page=current_page
                total_pages=Signal::derive(pages)
                on_page_change=Callback::new(move |page| set_current_page.set(page))
            />

            <h3 class="section-title">"Generate a New Product"</h3>
            <div class="button-row">
                <button
                    class="button"
                    on:click=move |_| set_active_tab.set(AppTab::CreateProduct)
                >
                    "Generate a Product"
                </button>
                {move || {
                    generated.get().and_then(|resp| {
                        resp.product["id"].as_str().map(|gid| {
                            let admin_id = product_admin_id(gid);
                            view! {
                                <a
                                    class="button button--plain"
                                    href=format!("shopify:admin/products/{}", admin_id)
                                    target="_blank"
                                >
                                    "View product"
                                </a>
                            }
                        })
                    })
                }}
            </div>

            {move || {
                generated.get().map(|resp| {
                    let product_json = serde_json::to_string_pretty(&resp.product)
                        .unwrap_or_else(|_| "{}".to_string());
                    let variant_json = serde_json::to_string_pretty(&resp.variant)
                        .unwrap_or_else(|_| "{}".to_string());
                    view! {
                        <JsonViewer
                            json_content=product_json
                            title="productCreate mutation result".to_string()
                        />
                        <JsonViewer
                            json_content=variant_json
                            title="productVariantsBulkUpdate mutation result".to_string()
                        />
                    }
                })
            }}
        </div>
    }
}
