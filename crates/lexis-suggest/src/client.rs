use std::time::Duration;

use async_trait::async_trait;
use lexis_config::ai::AiConfig;
use serde::{Deserialize, Serialize};

use crate::{ProviderMetadata, SuggestError, WordSuggester};

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    completion: Option<String>,
}

/// Chat-completion endpoint taking `{"messages": [...]}` and answering
/// `{"completion": "..."}`
#[derive(Clone)]
pub struct LlmSuggester {
    client: reqwest::Client,
    api_url: String,
    system_prompt: String,
    word_count: usize,
}

impl LlmSuggester {
    pub fn new(
        api_url: String,
        system_prompt: String,
        word_count: usize,
        timeout: Duration,
    ) -> Result<Self, SuggestError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url,
            system_prompt,
            word_count,
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, SuggestError> {
        Self::new(
            config.api_url.clone(),
            config.system_prompt.clone(),
            config.word_count,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    fn user_prompt(&self, topic: &str) -> String {
        format!(
            "Generate {} English vocabulary words with Vietnamese translations related to: {}. \
             Format the response as a JSON array with objects containing: word, translation, \
             difficulty (easy, medium, or hard), and category.",
            self.word_count, topic
        )
    }
}

#[async_trait]
impl WordSuggester for LlmSuggester {
    async fn complete(&self, topic: &str) -> Result<String, SuggestError> {
        let request = CompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: self.user_prompt(topic),
                },
            ],
        };

        tracing::debug!(url = %self.api_url, %topic, "requesting suggestions");
        let response = self.client.post(&self.api_url).json(&request).send().await?;

        if response.status() == 429 {
            return Err(SuggestError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(SuggestError::ApiError(format!("HTTP {}", response.status())));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::ApiError(format!("Failed to parse response: {}", e)))?;

        body.completion.ok_or(SuggestError::MissingCompletion)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "llm".to_string(),
            requires_network: true,
        }
    }
}

/// Stands in when suggestions are switched off in the config
#[derive(Clone, Copy, Default)]
pub struct DisabledSuggester;

#[async_trait]
impl WordSuggester for DisabledSuggester {
    async fn complete(&self, _topic: &str) -> Result<String, SuggestError> {
        Err(SuggestError::Disabled)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "disabled".to_string(),
            requires_network: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve one HTTP request with `status` and `body`, handing back the
    /// request body that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/ai/llm", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let (header_end, content_length) = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    break (pos + 4, length);
                }
            };
            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&buf[header_end..]).to_string()
        });

        (url, handle)
    }

    fn suggester(api_url: String) -> LlmSuggester {
        LlmSuggester {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
            api_url,
            system_prompt: "system".to_string(),
            word_count: 5,
        }
    }

    #[tokio::test]
    async fn test_sends_messages_and_reads_completion() {
        let (url, server) = serve_once("200 OK", r#"{"completion": "[]"}"#).await;

        let completion = suggester(url).complete("travel").await.unwrap();
        assert_eq!(completion, "[]");

        let request: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        let messages = request["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"].as_str().unwrap().contains("related to: travel"));
    }

    #[tokio::test]
    async fn test_missing_completion() {
        let (url, _server) = serve_once("200 OK", r#"{"text": "hi"}"#).await;
        let err = suggester(url).complete("travel").await.unwrap_err();
        assert!(matches!(err, SuggestError::MissingCompletion));
    }

    #[tokio::test]
    async fn test_http_errors() {
        let (url, _server) = serve_once("429 Too Many Requests", "{}").await;
        let err = suggester(url).complete("travel").await.unwrap_err();
        assert!(matches!(err, SuggestError::RateLimitExceeded));

        let (url, _server) = serve_once("500 Internal Server Error", "{}").await;
        let err = suggester(url).complete("travel").await.unwrap_err();
        assert!(matches!(err, SuggestError::ApiError(_)));
    }

    #[tokio::test]
    async fn test_disabled() {
        let err = DisabledSuggester.complete("travel").await.unwrap_err();
        assert!(matches!(err, SuggestError::Disabled));
    }
}
