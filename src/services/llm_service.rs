use crate::config::Config;
use crate::error::{Error, LlmError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Black-box text completion: one prompt in, the generated text out.
///
/// An empty string is a valid success; callers decide what it means.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, timeout: Duration) -> std::result::Result<String, LlmError>;
}

/// Runs `generator` under a hard deadline, whatever the implementation does
/// with the timeout it is handed.
pub async fn generate_bounded(
    generator: &dyn TextGenerator,
    prompt: &str,
    timeout: Duration,
) -> std::result::Result<String, LlmError> {
    match tokio::time::timeout(timeout, generator.generate(prompt, timeout)).await {
        Ok(result) => result,
        Err(_) => Err(LlmError::Timeout(timeout)),
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined. Blocked or empty
    /// generations come back as an empty string.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiService {
    pub fn new(config: &Config, client: Client) -> Result<Self> {
        let raw = format!(
            "{}/models/{}:generateContent",
            config.gemini_base_url.trim_end_matches('/'),
            config.gemini_model
        );
        let endpoint = Url::parse(&raw)
            .map_err(|e| Error::Config(format!("Invalid Gemini endpoint {}: {}", raw, e)))?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            endpoint,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiService {
    async fn generate(&self, prompt: &str, timeout: Duration) -> std::result::Result<String, LlmError> {
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let res = self
            .client
            .post(self.endpoint.clone())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| timeout_or(e, timeout))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(LlmError::Provider { status, body });
        }

        let body: GenerateResponse = res.json().await.map_err(|e| timeout_or(e, timeout))?;
        Ok(body.into_text())
    }
}

fn timeout_or(err: reqwest::Error, timeout: Duration) -> LlmError {
    if err.is_timeout() {
        LlmError::Timeout(timeout)
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sleepy;

    #[async_trait]
    impl TextGenerator for Sleepy {
        async fn generate(&self, _prompt: &str, _timeout: Duration) -> std::result::Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn bounded_call_reports_timeout() {
        let err = generate_bounded(&Sleepy, "hola", Duration::from_secs(30))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Timeout(d) if d == Duration::from_secs(30)));
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let body: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "<h3>Hola"}, {"text": "</h3>"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(body.into_text(), "<h3>Hola</h3>");
    }

    #[test]
    fn blocked_response_is_empty_text() {
        let body: GenerateResponse =
            serde_json::from_value(serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}}))
                .unwrap();
        assert_eq!(body.into_text(), "");
    }

    #[test]
    fn endpoint_is_built_from_config() {
        let config = Config {
            server_address: "127.0.0.1:0".into(),
            gemini_api_key: "k".into(),
            gemini_model: "gemini-2.5-flash".into(),
            gemini_base_url: "https://example.test/v1beta/".into(),
            llm_timeout_secs: 30,
            static_dir: "static".into(),
        };
        let svc = GeminiService::new(&config, Client::new()).unwrap();
        assert_eq!(
            svc.endpoint.as_str(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
