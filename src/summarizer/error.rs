use thiserror::Error;

use crate::config::ConfigError;
use crate::gateway::GatewayError;
use crate::resolver::ResolveError;
use crate::tokens::TokenizerError;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error("Could not resolve input: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Completion failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Model requested '{0}' after the input was already resolved")]
    UnexpectedFunctionCall(String),

    #[error("Nothing to summarize: the resolved text is empty")]
    EmptyText,
}
