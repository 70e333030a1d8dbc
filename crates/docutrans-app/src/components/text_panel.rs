use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use docutrans_protocol::selection;

use crate::api;
use crate::dom;
use crate::state::{AppState, Output};

/// Free-text input and the text-translation request.
#[component]
pub fn TextPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let input_text = state.input_text;
    let source_language = state.source_language;
    let target_language = state.target_language;
    let output = state.output;

    let on_input = move |ev: ev::Event| {
        input_text.set(event_target_value(&ev));
    };

    let translate = move |_| {
        let text = input_text.get_untracked();
        if let Err(err) = selection::check_text(&text) {
            dom::alert(&err.to_string());
            return;
        }

        let source = source_language.get_untracked();
        let target = target_language.get_untracked();
        spawn_local(async move {
            match api::translate_text(&text, &source, &target).await {
                Ok(translation) => output.set(Output::Text(translation.translated_text)),
                Err(err) => {
                    log::error!("text translation failed: {err}");
                    dom::alert("Error translating text. See console for details.");
                }
            }
        });
    };

    view! {
        <div class="card">
            <h2 class="card-title">"Translate Text"</h2>
            <textarea
                class="text-input"
                placeholder="Enter text to translate\u{2026}"
                prop:value=move || input_text.get()
                on:input=on_input
            ></textarea>
            <button class="btn-primary" on:click=translate>
                "Translate Text"
            </button>
        </div>
    }
}
