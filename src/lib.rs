// Public API exports
pub mod chunker;
pub mod config;
pub mod gateway;
pub mod resolver;
pub mod summarizer;
pub mod tokens;

// Re-export main types for convenience
pub use chunker::{Chunk, DEFAULT_TOKEN_LIMIT, chunk_text};
pub use config::{ConfigError, SummarizerConfig};

pub use tokens::{
    CharEstimateCounter, SentenceSegmenter, TiktokenCounter, TokenCounter, TokenizerError,
    UnicodeSentenceSegmenter,
};

pub use gateway::{
    ChatGateway, Completion, CompletionRequest, FUNCTION_DESCRIPTORS, FunctionCall,
    FunctionDescriptor, GatewayError, Message, OpenAiGateway, Role,
};

pub use resolver::{ContentResolver, DefaultResolver, ResolveError, ResolverRequest};

pub use summarizer::{Strategy, SummarizeError, Summarizer};
