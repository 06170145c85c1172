//! Request boundary tests against the full router with stubbed collaborators

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use yomu_config::Config;
use yomu_core::{
    Analyzer, AnalyzerBuilder, AnalyzerError, AnalyzerResource, TokenizeService, TranslateOptions,
};
use yomu_lang_japanese::{HepburnRomanizer, parse_ipadic_feature};
use yomu_translator::{LanguageCode, ProviderMetadata, TranslateError, Translator};
use yomu_types::Morpheme;

use crate::routes::create_router;
use crate::state::AppState;

const WORDS: [(&str, &str); 3] = [
    ("日本語", "名詞,一般,*,*,*,*,日本語,ニホンゴ,ニホンゴ"),
    ("分析", "名詞,サ変接続,*,*,*,*,分析,ブンセキ,ブンセキ"),
    ("翻訳", "名詞,サ変接続,*,*,*,*,翻訳,ホンヤク,ホンヤク"),
];

struct WordListAnalyzer;

impl Analyzer for WordListAnalyzer {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn tokenize(&self, text: &str) -> Vec<Morpheme> {
        let mut out = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let (surface, feature) = WORDS
                .iter()
                .find(|(word, _)| rest.starts_with(word))
                .map(|(word, feature)| (*word, *feature))
                .unwrap_or((&rest[..c.len_utf8()], "記号,一般,*,*,*,*,*"));
            out.push(parse_ipadic_feature(surface, feature));
            rest = &rest[surface.len()..];
        }
        out
    }
}

struct StubBuilder {
    fail: bool,
}

impl AnalyzerBuilder for StubBuilder {
    fn build(&self) -> Result<Box<dyn Analyzer>, AnalyzerError> {
        if self.fail {
            return Err(AnalyzerError::DictionaryNotFound(
                "assets/dict/system.dic.zst".to_string(),
            ));
        }
        Ok(Box::new(WordListAnalyzer))
    }
}

struct StubTranslator;

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: LanguageCode,
        _to: LanguageCode,
    ) -> Result<String, TranslateError> {
        let translated = match text {
            "日本語" => "Japanese",
            "分析" => "analysis",
            "翻訳" => "translation",
            "分析・翻訳" => "analysis and translation",
            _ => return Err(TranslateError::MissingTranslation),
        };

        Ok(translated.to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
        }
    }
}

fn app_with(fail_build: bool, base_path: &str) -> Router {
    let service = TokenizeService::new(
        Arc::new(AnalyzerResource::new(Arc::new(StubBuilder { fail: fail_build }))),
        Arc::new(StubTranslator),
        Arc::new(HepburnRomanizer),
        TranslateOptions {
            timeout: Duration::from_secs(1),
            ..Default::default()
        },
    );
    let state = Arc::new(AppState::with_service(Config::default(), service));
    create_router(state, base_path)
}

fn app() -> Router {
    app_with(false, "")
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_tokenize_scenario() {
    let response = app()
        .oneshot(post("/api/tokenize", r#"{"text":"分析・翻訳"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["fullTextTranslation"], "analysis and translation");
    let tokens = body["tokens"].as_array().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["surface"], "分析");
    assert_eq!(tokens[0]["translation"], "analysis");
    assert_eq!(tokens[0]["romanized"], "bunseki");
    assert_eq!(tokens[1]["surface"], "・");
    assert_eq!(tokens[1]["translation"], "");
    assert_eq!(tokens[1]["romanized"], "・");
    assert_eq!(tokens[2]["translation"], "translation");
    assert_eq!(tokens[2]["romanized"], "hon'yaku");
    assert_eq!(tokens[2]["pos1"], "サ変接続");
}

#[tokio::test]
async fn test_empty_and_invalid_text_return_empty_result() {
    let empty = json!({ "tokens": [], "fullTextTranslation": "" });

    for body in [r#"{"text":""}"#, r#"{"text":"   "}"#, r#"{"text":5}"#, "{}", ""] {
        let response = app().oneshot(post("/api/tokenize", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "body {body:?}");
        assert_eq!(body_json(response).await, empty, "body {body:?}");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = app()
        .oneshot(post("/api/tokenize", "text=日本語"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    for method in ["GET", "PUT", "DELETE"] {
        let request = Request::builder()
            .method(method)
            .uri("/api/tokenize")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Method Not Allowed");
    }
}

#[tokio::test]
async fn test_analyzer_failure_is_server_error() {
    let response = app_with(true, "")
        .oneshot(post("/api/tokenize", r#"{"text":"日本語"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Dictionary not found")
    );
}

#[tokio::test]
async fn test_empty_text_does_not_need_analyzer() {
    let response = app_with(true, "")
        .oneshot(post("/api/tokenize", r#"{"text":""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_analyzer_state() {
    let app = app();
    let health = || {
        Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap()
    };

    let body = body_json(app.clone().oneshot(health()).await.unwrap()).await;
    assert_eq!(body, json!({ "status": "ok", "analyzer": "uninitialized" }));

    app.clone()
        .oneshot(post("/api/tokenize", r#"{"text":"日本語"}"#))
        .await
        .unwrap();

    let body = body_json(app.oneshot(health()).await.unwrap()).await;
    assert_eq!(body["analyzer"], "ready");
}

#[tokio::test]
async fn test_base_path_prefix() {
    let app = app_with(false, "/yomu");

    let response = app
        .clone()
        .oneshot(post("/yomu/api/tokenize", r#"{"text":"日本語"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["fullTextTranslation"], "Japanese");

    let response = app
        .oneshot(post("/api/tokenize", r#"{"text":"日本語"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
