use serde::{Deserialize, Deserializer, Serialize};

/// One segment produced by the morphological analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub base: Option<String>,
    /// Katakana reading, absent for symbols and unknown words
    pub reading: Option<String>,
    pub pronunciation: Option<String>,
    pub pos: String,
    pub pos1: String,
    pub pos2: String,
    pub pos3: String,
}

/// Morpheme enriched with its English gloss and romanization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(flatten)]
    pub morpheme: Morpheme,
    /// Empty when the token was not sent for translation
    pub translation: String,
    pub romanized: String,
}

impl Token {
    pub fn surface(&self) -> &str {
        &self.morpheme.surface
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizationResult {
    pub tokens: Vec<Token>,
    pub full_text_translation: String,
}

impl TokenizationResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Body of a tokenize request.
///
/// A missing or non-string `text` deserializes to an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenizeRequest {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Text::deserialize(deserializer)? {
        Text::Str(text) => text,
        Text::Other(_) => String::new(),
    })
}
