use leptos::prelude::*;

use crate::state::{AppState, Output};

/// Shared output area. Failed requests never write here, so the last
/// successful response stays visible until the next one replaces it.
#[component]
pub fn OutputPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let output = state.output;

    view! {
        <div class="card">
            <h2 class="card-title">"Output"</h2>
            <div class="output-panel">
                {move || match output.get() {
                    Output::Empty => view! {
                        <span class="output-placeholder">
                            "Translations will appear here\u{2026}"
                        </span>
                    }
                    .into_any(),
                    Output::Files(entries) => view! {
                        <div>
                            {entries
                                .into_iter()
                                .map(|(name, text)| {
                                    view! {
                                        <p>
                                            <b>{format!("{name}:")}</b>
                                            " "
                                            {text}
                                        </p>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                    Output::Text(text) => view! { <span>{text}</span> }.into_any(),
                }}
            </div>
        </div>
    }
}
