use std::path::PathBuf;

use vibrato::{Dictionary, Tokenizer};
use yomu_core::{Analyzer, AnalyzerBuilder, AnalyzerError};
use yomu_types::Morpheme;

use crate::loader::DictionaryLoader;

/// IPADIC placeholder for "no value"
const UNSET: &str = "*";

/// Japanese morphological analyzer backed by a vibrato dictionary
pub struct JapaneseAnalyzer {
    tokenizer: Tokenizer,
}

impl JapaneseAnalyzer {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            tokenizer: Tokenizer::new(dictionary),
        }
    }
}

impl Analyzer for JapaneseAnalyzer {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn tokenize(&self, text: &str) -> Vec<Morpheme> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();

        (0..worker.num_tokens())
            .map(|i| {
                let token = worker.token(i);
                parse_ipadic_feature(token.surface(), token.feature())
            })
            .collect()
    }
}

/// Loads the system dictionary from disk when the analyzer is first needed
pub struct JapaneseAnalyzerBuilder {
    dictionary_path: PathBuf,
}

impl JapaneseAnalyzerBuilder {
    pub fn new(dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
        }
    }
}

impl AnalyzerBuilder for JapaneseAnalyzerBuilder {
    fn build(&self) -> Result<Box<dyn Analyzer>, AnalyzerError> {
        let dictionary = DictionaryLoader::load_from_file(&self.dictionary_path)?;
        Ok(Box::new(JapaneseAnalyzer::new(dictionary)))
    }
}

/// Map an IPADIC feature string onto a morpheme.
///
/// Layout: `pos,pos1,pos2,pos3,conjugation type,conjugation form,base,reading,pronunciation`.
/// Unknown words carry only the first seven columns.
pub fn parse_ipadic_feature(surface: &str, feature: &str) -> Morpheme {
    let columns: Vec<&str> = feature.split(',').collect();

    let level = |i: usize| columns.get(i).copied().unwrap_or(UNSET).to_string();
    let optional = |i: usize| {
        columns
            .get(i)
            .filter(|v| !v.is_empty() && **v != UNSET)
            .map(|v| v.to_string())
    };

    Morpheme {
        surface: surface.to_string(),
        base: optional(6),
        reading: optional(7),
        pronunciation: optional(8),
        pos: level(0),
        pos1: level(1),
        pos2: level(2),
        pos3: level(3),
    }
}
