use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

use super::types::{ChatRequest, ChatResponse, WireFunction, WireMessage};
use super::{ChatGateway, Completion, CompletionRequest, FunctionCall};
use crate::config::SummarizerConfig;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Malformed completion response: {0}")]
    Decode(String),

    #[error("Completion response carried neither text nor a function call")]
    EmptyResponse,

    #[error("Model requested unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Invalid arguments for function '{name}': {reason}")]
    InvalidArguments { name: String, reason: String },
}

/// Chat-completions client for OpenAI-compatible endpoints
pub struct OpenAiGateway {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(config: &SummarizerConfig) -> Result<Self, GatewayError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: config.timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request<'a>(&'a self, request: CompletionRequest) -> ChatRequest<'a> {
        let messages = request
            .messages
            .into_iter()
            .map(|m| WireMessage {
                role: m.role,
                name: m.name,
                content: Some(m.content),
                function_call: None,
            })
            .collect();

        let functions = request.functions.map(|table| {
            table
                .iter()
                .map(|f| WireFunction {
                    name: f.name,
                    description: f.description,
                    parameters: f.parameters_schema(),
                })
                .collect()
        });

        ChatRequest {
            model: &self.model,
            messages,
            functions,
            function_call: request.function_call.map(|mode| mode.as_str()),
        }
    }

    fn map_send_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::RequestFailed(err)
        }
    }
}

#[async_trait]
impl ChatGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, GatewayError> {
        tracing::debug!(
            model = %self.model,
            messages = request.messages.len(),
            functions = request.functions.map_or(0, |f| f.len()),
            "Sending completion request"
        );

        let body = self.build_request(request);
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => GatewayError::Unauthorized(text),
                StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(text),
                _ => GatewayError::ServerError {
                    status: status.as_u16(),
                    body: text,
                },
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;
        into_completion(parsed)
    }
}

/// Reduce a raw response to text or a function call, preferring the call
pub(super) fn into_completion(response: ChatResponse) -> Result<Completion, GatewayError> {
    let message = response
        .choices
        .into_iter()
        .next()
        .ok_or(GatewayError::EmptyResponse)?
        .message;

    if let Some(call) = message.function_call {
        return Ok(Completion::FunctionCall(FunctionCall {
            name: call.name,
            arguments: call.arguments,
        }));
    }

    message
        .content
        .map(Completion::Text)
        .ok_or(GatewayError::EmptyResponse)
}
