pub mod error;
pub mod language;
pub mod preprocess;
pub mod service;
pub mod state;


pub use error::{AnalyzerError, CoreError};
pub use language::{Analyzer, AnalyzerBuilder, Romanizer};
pub use service::{TokenizeService, TranslateOptions};
pub use state::{AnalyzerResource, AnalyzerStatus};
