use leptos::prelude::*;

/// Contents of the shared output area. Both requesters write here; whichever
/// response lands last wins, with no ordering guarantee between overlapping
/// requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Empty,
    /// `(filename, translated)` pairs from `/translate_files`.
    Files(Vec<(String, String)>),
    /// Plain translated text from `/translate_text`.
    Text(String),
}

/// View-model shared through the Leptos context. Components read and write
/// these signals instead of reaching into the DOM by id; the one raw element
/// the app needs (the file input) is held as a `NodeRef` inside the upload
/// panel.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Names of the currently selected files, in selection order.
    pub file_names: RwSignal<Vec<String>>,
    pub input_text: RwSignal<String>,
    pub source_language: RwSignal<String>,
    pub target_language: RwSignal<String>,
    pub output: RwSignal<Output>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            file_names: RwSignal::new(Vec::new()),
            input_text: RwSignal::new(String::new()),
            source_language: RwSignal::new("auto".to_string()),
            target_language: RwSignal::new("en".to_string()),
            output: RwSignal::new(Output::Empty),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
