use crate::config::{ApiKey, DEFAULT_MODEL};
use crate::traits::GenerationService;
use crate::{ChatMessage, GenerationRequest, SummaryError};
use tracing::{debug, info, warn};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const SUMMARY_INSTRUCTION: &str = "请为以下文档生成中文摘要：";

/// Builds the system and user messages for one document.
pub fn summary_messages(text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("{SUMMARY_INSTRUCTION}\n{text}")),
    ]
}

pub struct Summarizer<S> {
    service: S,
    api_key: ApiKey,
    model: String,
}

impl<S> Summarizer<S>
where
    S: GenerationService + Send + Sync,
{
    pub fn new(service: S, api_key: ApiKey) -> Self {
        Self {
            service,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// One request per call; empty text never reaches the service.
    pub async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        if text.trim().is_empty() {
            info!("no text to summarize");
            return Err(SummaryError::EmptyInput);
        }

        let request = GenerationRequest {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            messages: summary_messages(text),
        };
        debug!(model = %self.model, chars = text.chars().count(), "requesting summary");

        let response = self.service.generate(&request).await?;
        let request_id = response.request_id.as_deref().unwrap_or("-");

        if !response.is_success() {
            let message = response.message.clone().unwrap_or_default();
            warn!(status = response.status_code, request_id, message = %message, "API error");
            return Err(SummaryError::Service {
                status: response.status_code,
                message,
            });
        }

        debug!(request_id, "summary received");

        // Blank output counts as no output.
        response
            .output_text
            .filter(|summary| !summary.trim().is_empty())
            .ok_or(SummaryError::MissingOutput)
    }
}
