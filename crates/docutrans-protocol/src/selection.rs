use thiserror::Error;

/// Hard cap on files per upload. The backend processes the batch in one
/// request, so the front end rejects oversized selections before any bytes
/// leave the browser.
pub const MAX_FILES: usize = 50;

/// Input rejected before a request is built. No network traffic results from
/// any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("you can only upload a maximum of {MAX_FILES} files")]
    TooManyFiles(usize),

    #[error("please select files to translate")]
    NoFiles,

    #[error("please enter text to translate")]
    EmptyText,
}

/// Gate for the file-input change handler: a selection over [`MAX_FILES`]
/// must be discarded entirely.
pub fn check_selection_size(count: usize) -> Result<(), SelectionError> {
    if count > MAX_FILES {
        Err(SelectionError::TooManyFiles(count))
    } else {
        Ok(())
    }
}

/// Gate for submitting a file-translation request.
pub fn check_upload(count: usize) -> Result<(), SelectionError> {
    if count == 0 {
        return Err(SelectionError::NoFiles);
    }
    check_selection_size(count)
}

/// Gate for submitting a text-translation request.
pub fn check_text(text: &str) -> Result<(), SelectionError> {
    if text.is_empty() {
        Err(SelectionError::EmptyText)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_at_cap_is_accepted() {
        assert_eq!(check_selection_size(0), Ok(()));
        assert_eq!(check_selection_size(1), Ok(()));
        assert_eq!(check_selection_size(MAX_FILES), Ok(()));
    }

    #[test]
    fn selection_over_cap_is_rejected() {
        assert_eq!(
            check_selection_size(MAX_FILES + 1),
            Err(SelectionError::TooManyFiles(51))
        );
        assert_eq!(
            check_selection_size(1000),
            Err(SelectionError::TooManyFiles(1000))
        );
    }

    #[test]
    fn upload_requires_at_least_one_file() {
        assert_eq!(check_upload(0), Err(SelectionError::NoFiles));
        assert_eq!(check_upload(1), Ok(()));
        assert_eq!(check_upload(MAX_FILES), Ok(()));
        assert_eq!(
            check_upload(MAX_FILES + 1),
            Err(SelectionError::TooManyFiles(51))
        );
    }

    #[test]
    fn text_must_be_non_empty() {
        assert_eq!(check_text(""), Err(SelectionError::EmptyText));
        assert_eq!(check_text("hola"), Ok(()));
        // Whitespace-only text goes through; the backend decides what to do
        // with it, matching the original front end.
        assert_eq!(check_text("   "), Ok(()));
    }

    #[test]
    fn errors_render_user_facing_messages() {
        assert_eq!(
            SelectionError::TooManyFiles(51).to_string(),
            "you can only upload a maximum of 50 files"
        );
        assert_eq!(
            SelectionError::NoFiles.to_string(),
            "please select files to translate"
        );
    }
}
