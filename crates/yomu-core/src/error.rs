/// Failure to construct the morphological analyzer.
///
/// `Clone` because one build attempt reports the same error to every caller
/// that was waiting on it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),

    #[error("Analyzer build aborted: {0}")]
    BuildAborted(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Analyzer unavailable: {0}")]
    AnalyzerUnavailable(#[from] AnalyzerError),

    #[error("Tokenization failed: {0}")]
    AnalysisFailed(String),
}
