use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use yomu_config::translator::TranslatorConfig;
use yomu_translator::{LanguageCode, ProviderMetadata, TranslateError, Translator};

/// MyMemory free translation API client
#[derive(Clone)]
pub struct JapaneseTranslator {
    client: reqwest::Client,
    api_url: String,
    user_agent: String,
}

impl JapaneseTranslator {
    pub fn new(api_url: String, user_agent: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            user_agent,
        }
    }

    /// Client whose requests are also bounded by the configured timeout
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl Translator for JapaneseTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<String, TranslateError> {
        let langpair = format!("{}|{}", from, to);
        let params = [("q", text), ("langpair", langpair.as_str())];

        let response = self
            .client
            .get(&self.api_url)
            .header(USER_AGENT, &self.user_agent)
            .query(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        extract_translated_text(&json).map(str::to_string)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "MyMemory".to_string(),
        }
    }
}

/// `responseData.translatedText`; an empty string counts as missing
fn extract_translated_text(json: &serde_json::Value) -> Result<&str, TranslateError> {
    json["responseData"]["translatedText"]
        .as_str()
        .filter(|text| !text.is_empty())
        .ok_or(TranslateError::MissingTranslation)
}
