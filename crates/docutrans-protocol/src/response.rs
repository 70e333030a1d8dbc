use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Decoded body of a `/translate_files` response: one `(filename, translated)`
/// pair per uploaded file, in the order the server emitted them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileTranslations {
    pub entries: Vec<(String, String)>,
}

impl FileTranslations {
    /// Decodes the bare JSON object the backend returns, e.g.
    /// `{"a.txt": "X", "b.txt": "Y"}`. Every value must be a string.
    pub fn decode(body: &str) -> Result<Self, ApiError> {
        let map: serde_json::Map<String, Value> = serde_json::from_str(body)?;
        let mut entries = Vec::with_capacity(map.len());
        for (filename, value) in map {
            match value {
                Value::String(translated) => entries.push((filename, translated)),
                other => {
                    return Err(ApiError::Decode(format!(
                        "translation for {filename:?} is not a string: {other}"
                    )));
                }
            }
        }
        Ok(Self { entries })
    }
}

/// Decoded body of a `/translate_text` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextTranslation {
    pub translated_text: String,
}

impl TextTranslation {
    pub fn decode(body: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_translations_decode_in_server_order() {
        let body = r#"{"b.txt":"Y","a.txt":"X"}"#;
        let decoded = FileTranslations::decode(body).unwrap();
        assert_eq!(
            decoded.entries,
            vec![
                ("b.txt".to_string(), "Y".to_string()),
                ("a.txt".to_string(), "X".to_string()),
            ]
        );
    }

    #[test]
    fn empty_object_decodes_to_no_entries() {
        let decoded = FileTranslations::decode("{}").unwrap();
        assert!(decoded.entries.is_empty());
    }

    #[test]
    fn non_string_translation_is_a_decode_error() {
        let err = FileTranslations::decode(r#"{"a.txt": 3}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            FileTranslations::decode("not json"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            TextTranslation::decode("<html>502</html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn text_translation_decodes_the_field() {
        let decoded = TextTranslation::decode(r#"{"translated_text":"hola"}"#).unwrap();
        assert_eq!(decoded.translated_text, "hola");
    }

    #[test]
    fn text_translation_requires_the_field() {
        assert!(matches!(
            TextTranslation::decode(r#"{"translation":"hola"}"#),
            Err(ApiError::Decode(_))
        ));
    }
}
