use leptos::prelude::*;

/// Static mock of a product form. None of the fields are wired to
/// anything and no request is ever made from this page.
#[component]
pub fn ProductFormStub() -> impl IntoView {
    view! {
        <div class="page form-stub-page">
            <div class="card">
                <h2 class="page-title">"Create a Product"</h2>
                <hr class="divider" />
                <div class="form">
                    <label class="form-field">
                        <span class="form-label">"Product ID"</span>
                        <input type="text" autocomplete="off" />
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Product Status"</span>
                        <input type="text" autocomplete="off" />
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Product Variant"</span>
                        <input type="text" autocomplete="off" />
                    </label>
                </div>
                <hr class="divider" />
                <div class="button-row">
                    <button class="button">"Cancel"</button>
                    <button class="button button--primary">"Create"</button>
                </div>
            </div>
        </div>
    }
}
