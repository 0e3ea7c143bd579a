use super::{Summarizer, SummarizeError, prompts};
use crate::gateway::{Completion, CompletionRequest, FUNCTION_DESCRIPTORS, Message};
use crate::resolver::ResolverRequest;

impl Summarizer {
    /// Single-pass summary.
    ///
    /// Literal text is answered by the first completion. A file or URL costs
    /// a second completion carrying the resolved text, hard-truncated to the
    /// token limit; anything past the limit is dropped.
    pub async fn summarize_naive(&self, input: &str) -> Result<String, SummarizeError> {
        let prompt = prompts::bullet_summary(input);

        let first = self
            .gateway
            .complete(CompletionRequest::user(prompt.clone()).with_functions(&FUNCTION_DESCRIPTORS))
            .await?;

        let call = match first {
            Completion::Text(summary) => return Ok(summary),
            Completion::FunctionCall(call) => call,
        };

        let request = ResolverRequest::from_function_call(&call)?;
        tracing::debug!(?request, "Resolving input");
        let text = self.resolver.resolve(&request).await?;
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let limit = self.config.token_limit;
        let truncated = self.counter.truncate(&text, limit);
        if truncated.len() < text.len() {
            tracing::warn!(
                token_limit = limit,
                kept_bytes = truncated.len(),
                dropped_bytes = text.len() - truncated.len(),
                "The text was truncated"
            );
        }

        let followup = CompletionRequest::new(vec![
            Message::user(prompt),
            Message::function_result(request.function_name(), truncated),
        ])
        .with_functions(&FUNCTION_DESCRIPTORS);

        match self.gateway.complete(followup).await? {
            Completion::Text(summary) => Ok(summary),
            Completion::FunctionCall(call) => Err(SummarizeError::UnexpectedFunctionCall(call.name)),
        }
    }
}
