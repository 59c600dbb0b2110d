use leptos::prelude::*;

/// Titled JSON panel with copy-to-clipboard and a size footer.
#[component]
pub fn JsonViewer(
    /// Pretty-printed JSON to display
    json_content: String,
    /// Panel title
    #[prop(optional)]
    title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let json_content_for_copy = json_content.clone();
    let json_content_for_stats = json_content.clone();

    let handle_copy = move |_| {
        let window = web_sys::window().expect("no window");
        let clipboard = window.navigator().clipboard();
        let content = json_content_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
        });
        set_copied.set(true);

        // Reset after 2 seconds
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h3 class="json-viewer__title">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <button class="button button--secondary" on:click=handle_copy>
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
            </div>
            <div class="json-viewer__body">
                <pre class="json-viewer__content">{json_content}</pre>
            </div>
            <div class="json-viewer__footer">
                {format!(
                    "{} characters | {} lines",
                    json_content_for_stats.len(),
                    json_content_for_stats.lines().count(),
                )}
            </div>
        </div>
    }
}
