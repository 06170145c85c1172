use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use yomu_translator::{Translator, translate_or_original};
use yomu_types::{Morpheme, Token, TokenizationResult};

use crate::error::CoreError;
use crate::language::Romanizer;
use crate::preprocess::{prepare_input, should_translate};
use crate::state::AnalyzerResource;

/// Language pair and per-call bound used for every translation
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub from_lang: String,
    pub to_lang: String,
    pub timeout: Duration,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            from_lang: "ja".to_string(),
            to_lang: "en".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Tokenizes text and glosses every token plus the whole text
pub struct TokenizeService {
    analyzer: Arc<AnalyzerResource>,
    translator: Arc<dyn Translator>,
    romanizer: Arc<dyn Romanizer>,
    options: TranslateOptions,
}

impl TokenizeService {
    pub fn new(
        analyzer: Arc<AnalyzerResource>,
        translator: Arc<dyn Translator>,
        romanizer: Arc<dyn Romanizer>,
        options: TranslateOptions,
    ) -> Self {
        Self {
            analyzer,
            translator,
            romanizer,
            options,
        }
    }

    pub fn analyzer(&self) -> &AnalyzerResource {
        &self.analyzer
    }

    /// Only analyzer failures are reported as errors. Translation failures
    /// fall back to the untranslated text.
    pub async fn process(&self, text: &str) -> Result<TokenizationResult, CoreError> {
        let Some(text) = prepare_input(text) else {
            tracing::debug!("Empty input, skipping analysis");
            return Ok(TokenizationResult::empty());
        };

        let analyzer = self.analyzer.acquire().await?;
        let morphemes = {
            let text = text.to_string();
            tokio::task::spawn_blocking(move || analyzer.tokenize(&text))
                .await
                .map_err(|e| CoreError::AnalysisFailed(e.to_string()))?
        };
        tracing::debug!("Tokenized into {} tokens", morphemes.len());

        let (translations, full_text_translation) = self.translate_all(text, &morphemes).await;

        let tokens = morphemes
            .into_iter()
            .zip(translations)
            .map(|(morpheme, translation)| {
                let romanized = self.romanize(&morpheme);
                Token {
                    morpheme,
                    translation,
                    romanized,
                }
            })
            .collect();

        Ok(TokenizationResult {
            tokens,
            full_text_translation,
        })
    }

    /// One task per translatable token plus one for the whole text, all in a
    /// single `JoinSet` so dropping the request aborts every call.
    async fn translate_all(&self, text: &str, morphemes: &[Morpheme]) -> (Vec<String>, String) {
        // Pre-filled with the fallback so a lost task still leaves a valid slot
        let mut translations: Vec<String> = morphemes
            .iter()
            .map(|m| {
                if should_translate(&m.surface) {
                    m.surface.clone()
                } else {
                    String::new()
                }
            })
            .collect();
        let mut full_text_translation = text.to_string();

        // `None` tags the full text, `Some(index)` a token slot
        let mut tasks = JoinSet::new();
        let full_text = self.translation(text.to_string());
        tasks.spawn(async move { (None, full_text.await) });

        for (index, morpheme) in morphemes.iter().enumerate() {
            if !should_translate(&morpheme.surface) {
                continue;
            }

            let translation = self.translation(morpheme.surface.clone());
            tasks.spawn(async move { (Some(index), translation.await) });
        }

        // Completion order is arbitrary, the tag decides the slot
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((Some(index), translated)) => translations[index] = translated,
                Ok((None, translated)) => full_text_translation = translated,
                Err(e) => tracing::warn!("Translation task failed: {}", e),
            }
        }

        (translations, full_text_translation)
    }

    fn translation(&self, text: String) -> impl Future<Output = String> + Send + use<> {
        let translator = Arc::clone(&self.translator);
        let options = self.options.clone();

        async move {
            translate_or_original(
                translator.as_ref(),
                &text,
                &options.from_lang,
                &options.to_lang,
                options.timeout,
            )
            .await
        }
    }

    fn romanize(&self, morpheme: &Morpheme) -> String {
        match &morpheme.reading {
            Some(reading) => self.romanizer.romanize(reading),
            None => morpheme.surface.clone(),
        }
    }
}
