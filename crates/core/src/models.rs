use crate::config::ApiKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub api_key: ApiKey,
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Outcome of one generation call: a status code plus either output text or
/// the service's error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    pub status_code: u16,
    pub output_text: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl GenerationResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            output_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn failed(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipStage {
    Missing,
    Extract,
    Summarize,
    Write,
}

impl fmt::Display for SkipStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipStage::Missing => "missing",
            SkipStage::Extract => "extract",
            SkipStage::Summarize => "summarize",
            SkipStage::Write => "write",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct ProcessedDocument {
    pub source: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub stage: SkipStage,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: Vec<ProcessedDocument>,
    pub skipped: Vec<SkippedDocument>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.skipped.len()
    }
}
