use std::sync::Arc;

use anyhow::Context;
use yomu_config::Config;
use yomu_core::{AnalyzerResource, TokenizeService, TranslateOptions};
use yomu_lang_japanese::{HepburnRomanizer, JapaneseAnalyzerBuilder, JapaneseTranslator};

pub struct AppState {
    pub config: Config,
    pub service: TokenizeService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let builder = JapaneseAnalyzerBuilder::new(config.analyzer.dictionary_path.clone());
        let analyzer = Arc::new(AnalyzerResource::new(Arc::new(builder)));

        let translator = JapaneseTranslator::from_config(&config.translator)
            .context("Failed to create translation client")?;

        let options = TranslateOptions {
            from_lang: config.translator.from_lang.clone(),
            to_lang: config.translator.to_lang.clone(),
            timeout: config.translator.timeout(),
        };

        let service = TokenizeService::new(
            analyzer,
            Arc::new(translator),
            Arc::new(HepburnRomanizer),
            options,
        );

        Ok(Self::with_service(config, service))
    }

    pub fn with_service(config: Config, service: TokenizeService) -> Self {
        Self { config, service }
    }
}
