//! Fetch plumbing for the two translation endpoints. Each call is a single
//! fire-and-forget request: no retry, no timeout beyond the transport's own,
//! no cancellation once issued.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, RequestInit, Response};

use docutrans_protocol::{
    ApiError, FileTranslations, TextTranslation, FIELD_FILES, FIELD_SOURCE_LANGUAGE, FIELD_TEXT,
    FIELD_TARGET_LANGUAGE, TRANSLATE_FILES_PATH, TRANSLATE_TEXT_PATH,
};

fn network(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

async fn post_form(path: &str, form: &FormData) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // Passing FormData as the body lets the browser pick the multipart
    // boundary and content type.
    opts.set_body(form.as_ref());

    let resp_js = JsFuture::from(window.fetch_with_str_and_init(path, &opts))
        .await
        .map_err(network)?;
    let response: Response = resp_js
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text_js = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    text_js
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".into()))
}

/// POSTs every selected file plus the target language to `/translate_files`.
pub async fn translate_files(
    files: &[File],
    target_language: &str,
) -> Result<FileTranslations, ApiError> {
    let form = FormData::new().map_err(network)?;
    for file in files {
        form.append_with_blob(FIELD_FILES, file).map_err(network)?;
    }
    form.append_with_str(FIELD_TARGET_LANGUAGE, target_language)
        .map_err(network)?;

    let body = post_form(TRANSLATE_FILES_PATH, &form).await?;
    FileTranslations::decode(&body)
}

/// POSTs the input text plus both language codes to `/translate_text`.
pub async fn translate_text(
    text: &str,
    source_language: &str,
    target_language: &str,
) -> Result<TextTranslation, ApiError> {
    let form = FormData::new().map_err(network)?;
    form.append_with_str(FIELD_TEXT, text).map_err(network)?;
    form.append_with_str(FIELD_SOURCE_LANGUAGE, source_language)
        .map_err(network)?;
    form.append_with_str(FIELD_TARGET_LANGUAGE, target_language)
        .map_err(network)?;

    let body = post_form(TRANSLATE_TEXT_PATH, &form).await?;
    TextTranslation::decode(&body)
}
