pub mod header;
pub mod language_selector;
pub mod output;
pub mod text_panel;
pub mod upload;
