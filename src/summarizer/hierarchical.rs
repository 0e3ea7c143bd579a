use super::{Summarizer, SummarizeError, prompts};
use crate::chunker::Chunk;
use crate::gateway::{Completion, CompletionRequest, FUNCTION_DESCRIPTORS};
use crate::resolver::ResolverRequest;

impl Summarizer {
    /// Map-reduce summary: every chunk of the source is summarized on its
    /// own and the partial summaries are joined in chunk order.
    ///
    /// Costs at most one classification call plus one call per chunk. A
    /// literal input that already spans several chunks cannot be a file name
    /// or URL, so it skips classification.
    pub async fn summarize_hierarchical(&self, input: &str) -> Result<String, SummarizeError> {
        let input_chunks = self.chunk(input);
        if input_chunks.len() > 1 {
            tracing::info!(chunks = input_chunks.len(), "Input is long literal text");
            return self.reduce(input_chunks).await;
        }

        let classify = CompletionRequest::user(prompts::bullet_summary(input))
            .with_functions(&FUNCTION_DESCRIPTORS);

        let call = match self.gateway.complete(classify).await? {
            Completion::Text(summary) => return Ok(summary),
            Completion::FunctionCall(call) => call,
        };

        let request = ResolverRequest::from_function_call(&call)?;
        tracing::debug!(?request, "Resolving input");
        let text = self.resolver.resolve(&request).await?;
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let chunks = self.chunk(&text);
        tracing::info!(chunks = chunks.len(), "Resolved input");

        self.reduce(chunks).await
    }

    /// Summarize chunks and, when recursive reduce is enabled, keep
    /// re-summarizing the combined text until it fits the token limit or
    /// the pass budget runs out.
    async fn reduce(&self, mut chunks: Vec<Chunk>) -> Result<String, SummarizeError> {
        let limit = self.config.token_limit;
        let mut extra_passes = 0;

        loop {
            let combined = self.summarize_chunks(&chunks).await?;

            if !self.config.recursive_reduce {
                return Ok(combined);
            }

            let tokens = self.counter.count(&combined);
            if tokens <= limit {
                return Ok(combined);
            }
            if extra_passes >= self.config.max_reduce_depth {
                tracing::warn!(
                    tokens,
                    token_limit = limit,
                    passes = extra_passes,
                    "Combined summary still exceeds token limit; giving up on further reduction"
                );
                return Ok(combined);
            }

            extra_passes += 1;
            chunks = self.chunk(&combined);
            tracing::info!(
                pass = extra_passes,
                tokens,
                chunks = chunks.len(),
                "Re-summarizing combined summary"
            );
        }
    }

    /// One completion per chunk, strictly in order, joined with spaces
    async fn summarize_chunks(&self, chunks: &[Chunk]) -> Result<String, SummarizeError> {
        let mut summaries = Vec::with_capacity(chunks.len());

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::debug!(
                chunk = index + 1,
                of = chunks.len(),
                tokens = chunk.token_count,
                "Summarizing chunk"
            );
            summaries.push(self.summarize_chunk(chunk).await?);
        }

        Ok(summaries.join(" "))
    }

    async fn summarize_chunk(&self, chunk: &Chunk) -> Result<String, SummarizeError> {
        let request = CompletionRequest::user(prompts::chunk_summary(&chunk.text()));

        match self.gateway.complete(request).await? {
            Completion::Text(summary) => Ok(summary),
            Completion::FunctionCall(call) => Err(SummarizeError::UnexpectedFunctionCall(call.name)),
        }
    }
}
