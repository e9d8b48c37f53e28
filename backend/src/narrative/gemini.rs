use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL_NAME: &str = "gemini-1.5-flash";

#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("text generation service returned {0}: {1}")]
    Api(reqwest::StatusCode, String),
    #[error("text generation response contained no text")]
    EmptyResponse,
}

/// Client for the hosted text-generation service. One call per
/// classification, a single attempt, no retry.
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: API_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, MODEL_NAME);
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Api(status, body));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(NarrativeError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new("test-key".into()).with_base_url(base_url.to_string())
    }

    #[tokio::test]
    async fn generate_returns_candidate_text() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "This is recyclable! " }, { "text": "Flatten it first." }]
                }
            }]
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let text = test_client(&server.uri())
            .generate("what about cardboard?")
            .await
            .unwrap();
        assert_eq!(text, "This is recyclable! Flatten it first.");
    }

    #[tokio::test]
    async fn generate_surfaces_api_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": { "message": "bad key" } })),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("prompt").await;
        assert!(matches!(result, Err(NarrativeError::Api(status, _)) if status == 400));
    }

    #[tokio::test]
    async fn empty_candidates_are_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("prompt").await;
        assert!(matches!(result, Err(NarrativeError::EmptyResponse)));
    }
}
