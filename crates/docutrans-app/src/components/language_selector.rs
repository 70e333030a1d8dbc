use leptos::ev;
use leptos::prelude::*;

use docutrans_protocol::languages::{target_languages, LANGUAGES};

use crate::state::AppState;

/// Source and target language pickers. The source side offers `auto`; the
/// target side never does. Codes are forwarded to the backend untouched.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="card language-row">
            <LanguageSelect
                label="Source Language"
                value=state.source_language
                codes=LANGUAGES
            />
            <span class="language-arrow">"\u{2192}"</span>
            <LanguageSelect
                label="Target Language"
                value=state.target_language
                codes={target_languages().copied().collect::<Vec<_>>()}
            />
        </div>
    }
}

#[component]
fn LanguageSelect(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] codes: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        value.set(event_target_value(&ev));
    };

    view! {
        <div class="language-field">
            <label class="field-label">{label}</label>
            <select class="field-select" on:change=on_change>
                {codes.into_iter().map(|(code, name)| {
                    view! {
                        <option value=code selected=move || value.get() == code>
                            {name}
                        </option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
