use leptos::prelude::*;

use crate::domain::products::create_page::CreateProductPage;
use crate::domain::products::form_stub::ProductFormStub;
use crate::domain::products::list_page::ProductListPage;

/// The three pages reachable from the shell. No router; the active tab
/// is plain component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Products,
    CreateProduct,
    FormStub,
}

impl AppTab {
    fn label(self) -> &'static str {
        match self {
            AppTab::Products => "Products",
            AppTab::CreateProduct => "Create Product",
            AppTab::FormStub => "Form Stub",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(AppTab::Products);

    let tabs = [AppTab::Products, AppTab::CreateProduct, AppTab::FormStub];

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1 class="app-title">"Storefront Admin"</h1>
                <nav class="app-tabs">
                    {tabs
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || {
                                        if active_tab.get() == tab {
                                            "app-tab app-tab--active"
                                        } else {
                                            "app-tab"
                                        }
                                    }
                                    on:click=move |_| set_active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="app-content">
                {move || match active_tab.get() {
                    AppTab::Products => view! { <ProductListPage set_active_tab /> }.into_any(),
                    AppTab::CreateProduct => {
                        view! { <CreateProductPage set_active_tab /> }.into_any()
                    }
                    AppTab::FormStub => view! { <ProductFormStub /> }.into_any(),
                }}
            </main>
        </div>
    }
}
