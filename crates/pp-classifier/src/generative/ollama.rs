//! Ollama chat backend (`POST {host}/api/chat`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::GenerativeBackend;
use crate::config::GenerativeConfig;
use crate::error::{GenerativeError, GenerativeResult};

/// Ollama chat API request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    format: &'a str,
    stream: bool,
}

/// A single message in the chat request.
#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Ollama chat API response (only fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for an Ollama-compatible generative service.
pub struct OllamaBackend {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaBackend {
    pub fn new(config: &GenerativeConfig) -> GenerativeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GenerativeError::Transport(format!("failed to build client: {e}")))?;
        Ok(Self {
            client,
            url: format!("{}/api/chat", config.host.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl GenerativeBackend for OllamaBackend {
    async fn generate(&self, system: &str, instruction: &str) -> GenerativeResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: instruction,
                },
            ],
            format: "json",
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerativeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerativeError::Status {
                status: status.as_u16(),
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerativeError::MalformedReply(format!("response body: {e}")))?;

        chat.message
            .map(|m| m.content)
            .ok_or_else(|| GenerativeError::MalformedReply("response has no message".into()))
    }

    fn backend_name(&self) -> &str {
        "ollama"
    }
}
