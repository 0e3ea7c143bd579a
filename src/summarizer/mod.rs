mod error;
mod hierarchical;
mod naive;
pub mod prompts;


pub use error::SummarizeError;

use std::sync::Arc;

use crate::chunker::{Chunk, chunk_text};
use crate::config::SummarizerConfig;
use crate::gateway::{ChatGateway, OpenAiGateway};
use crate::resolver::{ContentResolver, DefaultResolver};
use crate::tokens::{SentenceSegmenter, TiktokenCounter, TokenCounter, UnicodeSentenceSegmenter};

/// How to fit an input into the model's request budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Truncate to one request; at most two round-trips
    #[value(alias = "n")]
    Naive,
    /// Summarize every chunk, then join the partial summaries
    #[value(aliases = ["mr", "map-reduce"])]
    Hierarchical,
}

/// Summarization pipeline over a chat gateway.
///
/// Holds no state between calls besides its collaborators, so one instance
/// can serve any number of inputs.
pub struct Summarizer {
    config: SummarizerConfig,
    gateway: Arc<dyn ChatGateway>,
    resolver: Arc<dyn ContentResolver>,
    counter: Arc<dyn TokenCounter>,
    segmenter: Arc<dyn SentenceSegmenter>,
}

impl Summarizer {
    pub fn new(
        config: SummarizerConfig,
        gateway: Arc<dyn ChatGateway>,
        resolver: Arc<dyn ContentResolver>,
        counter: Arc<dyn TokenCounter>,
    ) -> Self {
        Self {
            config,
            gateway,
            resolver,
            counter,
            segmenter: Arc::new(UnicodeSentenceSegmenter),
        }
    }

    /// Wire up the HTTP gateway, the default resolver and a tiktoken
    /// counter for the configured model
    pub fn from_config(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        config.validate()?;

        let counter = TiktokenCounter::for_model(&config.model)?;
        let gateway = OpenAiGateway::new(&config)?;
        let resolver = DefaultResolver::new(config.timeout)?;

        Ok(Self::new(
            config,
            Arc::new(gateway),
            Arc::new(resolver),
            Arc::new(counter),
        ))
    }

    pub fn with_segmenter(mut self, segmenter: Arc<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub async fn summarize(&self, strategy: Strategy, input: &str) -> Result<String, SummarizeError> {
        tracing::info!(?strategy, model = %self.config.model, "Summarizing input");
        match strategy {
            Strategy::Naive => self.summarize_naive(input).await,
            Strategy::Hierarchical => self.summarize_hierarchical(input).await,
        }
    }

    fn chunk(&self, text: &str) -> Vec<Chunk> {
        chunk_text(
            text,
            self.config.token_limit,
            self.counter.as_ref(),
            self.segmenter.as_ref(),
        )
    }
}
