use std::time::Duration;

use crate::{TranslateError, Translator};

/// Translate `text`, returning it unchanged on any failure.
///
/// Every error branch (timeout, transport, HTTP status, undecodable body,
/// missing translated field) collapses into the same identity fallback. The
/// error detail is only logged and then discarded, so callers never branch on
/// translation failure.
pub async fn translate_or_original(
    translator: &dyn Translator,
    text: &str,
    from: &str,
    to: &str,
    timeout: Duration,
) -> String {
    let call = translator.translate(text, from.to_string(), to.to_string());

    let result = match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(TranslateError::Timeout(timeout.as_millis())),
    };

    match result {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!(
                provider = %translator.metadata().name,
                "Translation failed, keeping original text: {}",
                e
            );
            text.to_string()
        }
    }
}
