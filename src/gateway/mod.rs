mod client;
mod functions;
mod message;
mod types;


pub use client::{GatewayError, OpenAiGateway};
pub use functions::{FETCH_PAGE, FUNCTION_DESCRIPTORS, FunctionDescriptor, READ_TEXT_FILE};
pub use message::{Completion, CompletionRequest, FunctionCall, FunctionCallMode, Message, Role};

use async_trait::async_trait;

/// Chat-completion backend
///
/// One call is one round-trip. Implementations never retry; failures are
/// returned to the caller as-is.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, GatewayError>;
}
