use crate::traits::GenerationService;
use crate::{ChatMessage, GenerationRequest, GenerationResponse, SummaryError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const DEFAULT_DASHSCOPE_ENDPOINT: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation";

/// DashScope text-generation API over HTTPS.
pub struct DashScopeClient {
    client: Arc<Client>,
    endpoint: Url,
}

#[derive(Debug, Serialize)]
struct GenerationBody<'a> {
    model: &'a str,
    input: GenerationInput<'a>,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationInput<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    result_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct DashScopeReply {
    #[serde(default)]
    output: Option<DashScopeOutput>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DashScopeOutput {
    #[serde(default)]
    text: Option<String>,
}

impl DashScopeClient {
    pub fn new(endpoint: &str) -> Result<Self, SummaryError> {
        Ok(Self {
            client: Arc::new(Client::new()),
            endpoint: Url::parse(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationService for DashScopeClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, SummaryError> {
        let body = GenerationBody {
            model: &request.model,
            input: GenerationInput {
                messages: &request.messages,
            },
            parameters: GenerationParameters {
                result_format: "text",
            },
        };

        debug!(endpoint = %self.endpoint, model = %request.model, "dashscope generation request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(request.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let raw = response.text().await?;

        Ok(parse_reply(status, &raw))
    }
}

/// Maps a status and raw body to a response. A body that is not the
/// expected JSON is kept verbatim as the message.
fn parse_reply(status: u16, raw: &str) -> GenerationResponse {
    let reply: DashScopeReply = match serde_json::from_str(raw) {
        Ok(reply) => reply,
        Err(_) => {
            return GenerationResponse {
                status_code: status,
                output_text: None,
                message: Some(raw.trim().to_string()),
                request_id: None,
            };
        }
    };

    let message = match (reply.code, reply.message) {
        (Some(code), Some(message)) if !code.is_empty() => Some(format!("{code}: {message}")),
        (_, Some(message)) => Some(message),
        (Some(code), None) => Some(code),
        (None, None) => None,
    };

    GenerationResponse {
        status_code: status,
        output_text: reply.output.and_then(|output| output.text),
        message,
        request_id: reply.request_id,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        parse_reply, DashScopeClient, GenerationBody, GenerationInput, GenerationParameters,
        DEFAULT_DASHSCOPE_ENDPOINT,
    };
    use crate::{ChatMessage, SummaryError};

    #[test]
    fn success_body_yields_output_text() {
        let raw = r#"{"output":{"text":"这是摘要","finish_reason":"stop"},"usage":{"input_tokens":12},"request_id":"req-1"}"#;

        let response = parse_reply(200, raw);

        assert!(response.is_success());
        assert_eq!(response.output_text.as_deref(), Some("这是摘要"));
        assert_eq!(response.request_id.as_deref(), Some("req-1"));
        assert_eq!(response.message, None);
    }

    #[test]
    fn error_body_yields_code_and_message() {
        let raw = r#"{"code":"InvalidApiKey","message":"Invalid API-key provided.","request_id":"req-2"}"#;

        let response = parse_reply(401, raw);

        assert_eq!(response.status_code, 401);
        assert_eq!(response.output_text, None);
        assert_eq!(
            response.message.as_deref(),
            Some("InvalidApiKey: Invalid API-key provided.")
        );
    }

    #[test]
    fn non_json_body_is_kept_as_message() {
        let response = parse_reply(502, "<html>Bad Gateway</html>\n");
        assert_eq!(response.status_code, 502);
        assert_eq!(response.message.as_deref(), Some("<html>Bad Gateway</html>"));
    }

    #[test]
    fn request_body_matches_dashscope_shape() -> Result<(), serde_json::Error> {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("usr")];
        let body = GenerationBody {
            model: "qwen-plus",
            input: GenerationInput {
                messages: &messages,
            },
            parameters: GenerationParameters {
                result_format: "text",
            },
        };

        let encoded = serde_json::to_value(&body)?;

        assert_eq!(encoded["model"], "qwen-plus");
        assert_eq!(encoded["input"]["messages"][0]["role"], "system");
        assert_eq!(encoded["input"]["messages"][1]["content"], "usr");
        assert_eq!(encoded["parameters"]["result_format"], "text");
        Ok(())
    }

    #[test]
    fn invalid_endpoint_is_rejected() -> Result<(), SummaryError> {
        assert!(matches!(DashScopeClient::new("not a url"), Err(SummaryError::Url(_))));
        let client = DashScopeClient::new(DEFAULT_DASHSCOPE_ENDPOINT)?;
        assert_eq!(client.endpoint().host_str(), Some("dashscope.aliyuncs.com"));
        Ok(())
    }
}
