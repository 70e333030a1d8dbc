use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::language_selector::LanguageSelector;
use crate::components::output::OutputPanel;
use crate::components::text_panel::TextPanel;
use crate::components::upload::UploadPanel;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    view! {
        <div class="page">
            <Header />

            <main class="content">
                <LanguageSelector />

                <div class="panel-grid">
                    <UploadPanel />
                    <TextPanel />
                </div>

                <OutputPanel />
            </main>

            <footer class="page-footer">
                "Files are sent to the server for translation; up to 50 per batch."
            </footer>
        </div>
    }
}
