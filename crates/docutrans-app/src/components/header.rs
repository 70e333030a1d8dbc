use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">"Docutrans"</h1>
            <span class="app-tagline">"Document & Text Translation"</span>
        </header>
    }
}
