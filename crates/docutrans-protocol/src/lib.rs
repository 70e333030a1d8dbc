//! Client half of the HTTP contract between the docutrans front end and its
//! translation backend: endpoint paths, multipart field names, selection
//! validation, and typed response decoding.
//!
//! Nothing in here touches the browser; the crate compiles and tests natively.

pub mod error;
pub mod languages;
pub mod response;
pub mod selection;

pub use error::ApiError;
pub use response::{FileTranslations, TextTranslation};
pub use selection::{SelectionError, MAX_FILES};

/// Endpoint accepting a multipart batch of files to translate.
pub const TRANSLATE_FILES_PATH: &str = "/translate_files";

/// Endpoint accepting a single block of text to translate.
pub const TRANSLATE_TEXT_PATH: &str = "/translate_text";

/// Repeated multipart field carrying one uploaded file per occurrence.
pub const FIELD_FILES: &str = "files";

/// Multipart field carrying the text to translate.
pub const FIELD_TEXT: &str = "text";

/// Multipart field carrying the language of the input text.
pub const FIELD_SOURCE_LANGUAGE: &str = "sourceLanguage";

/// Multipart field carrying the language to translate into.
pub const FIELD_TARGET_LANGUAGE: &str = "targetLanguage";
