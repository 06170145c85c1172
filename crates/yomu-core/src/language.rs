use yomu_types::Morpheme;

use crate::error::AnalyzerError;

/// Morphological analysis for one language
pub trait Analyzer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Segment text into morphemes.
    ///
    /// The result covers the input completely: joining every `surface` in
    /// order gives back `text`.
    fn tokenize(&self, text: &str) -> Vec<Morpheme>;
}

/// Constructs an [`Analyzer`]. Called on the blocking pool, may be slow.
pub trait AnalyzerBuilder: Send + Sync {
    fn build(&self) -> Result<Box<dyn Analyzer>, AnalyzerError>;
}

/// Transliterates a kana reading into Latin script
pub trait Romanizer: Send + Sync {
    fn romanize(&self, reading: &str) -> String;
}
