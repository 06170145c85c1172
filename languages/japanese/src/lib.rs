pub mod analyzer;
pub mod loader;
pub mod romaji;
pub mod translator;

pub use analyzer::{JapaneseAnalyzer, JapaneseAnalyzerBuilder, parse_ipadic_feature};
pub use loader::DictionaryLoader;
pub use romaji::HepburnRomanizer;
pub use translator::JapaneseTranslator;
