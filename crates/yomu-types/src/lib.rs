pub mod types;

pub use types::{Morpheme, Token, TokenizationResult, TokenizeRequest};
