use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use docutrans_protocol::selection;

use crate::api;
use crate::dom;
use crate::state::{AppState, Output};

/// File picker, selection listing, and the file-translation request.
///
/// The input element is the owner of the selected files; everything here reads
/// the live `FileList` rather than caching handles, so translation always sees
/// exactly what the user last picked.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let file_names = state.file_names;
    let target_language = state.target_language;
    let output = state.output;

    let input_ref = NodeRef::<html::Input>::new();

    let on_selection_change = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let files = input
            .files()
            .map(|list| dom::files_from_list(&list))
            .unwrap_or_default();

        if let Err(err) = selection::check_selection_size(files.len()) {
            dom::alert(&err.to_string());
            // Discard the whole selection so the input and listing agree.
            input.set_value("");
            file_names.set(Vec::new());
            return;
        }

        file_names.set(files.iter().map(|f| f.name()).collect());
    };

    let translate_files = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let files = input
            .files()
            .map(|list| dom::files_from_list(&list))
            .unwrap_or_default();

        if let Err(err) = selection::check_upload(files.len()) {
            dom::alert(&err.to_string());
            return;
        }

        let target = target_language.get_untracked();
        spawn_local(async move {
            match api::translate_files(&files, &target).await {
                Ok(translations) => output.set(Output::Files(translations.entries)),
                Err(err) => {
                    log::error!("file translation failed: {err}");
                    dom::alert("Error processing files. See console for details.");
                }
            }
        });
    };

    view! {
        <div class="card">
            <h2 class="card-title">"Translate Files"</h2>
            <input
                type="file"
                class="file-input"
                multiple=true
                accept=".png,.jpg,.jpeg,.pdf"
                node_ref=input_ref
                on:change=on_selection_change
            />
            <div class="file-list">
                {move || {
                    file_names
                        .get()
                        .into_iter()
                        .map(|name| view! { <p class="file-name">{name}</p> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button class="btn-primary" on:click=translate_files>
                "Translate Files"
            </button>
        </div>
    }
}
