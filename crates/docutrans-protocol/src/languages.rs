/// Languages offered in the selectors, as `(code, display name)`. The backend
/// accepts the code as-is; `auto` asks it to detect the source language and is
/// only meaningful for the source side.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("auto", "Auto-detect"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ru", "Russian"),
    ("uk", "Ukrainian"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("bn", "Bengali"),
    ("ta", "Tamil"),
    ("ur", "Urdu"),
    ("zh-cn", "Chinese (Simplified)"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("vi", "Vietnamese"),
    ("th", "Thai"),
    ("id", "Indonesian"),
    ("tr", "Turkish"),
    ("sv", "Swedish"),
    ("fi", "Finnish"),
    ("el", "Greek"),
    ("cs", "Czech"),
    ("ro", "Romanian"),
    ("hu", "Hungarian"),
    ("he", "Hebrew"),
    ("fa", "Persian"),
    ("sw", "Swahili"),
];

/// Every entry except `auto`, for the target selector.
pub fn target_languages() -> impl Iterator<Item = &'static (&'static str, &'static str)> {
    LANGUAGES.iter().filter(|(code, _)| *code != "auto")
}

pub fn display_name(code: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_list_excludes_auto() {
        assert!(target_languages().all(|(code, _)| *code != "auto"));
        assert_eq!(target_languages().count(), LANGUAGES.len() - 1);
    }

    #[test]
    fn display_name_falls_back_to_the_code() {
        assert_eq!(display_name("es"), "Spanish");
        assert_eq!(display_name("xx"), "xx");
    }
}
