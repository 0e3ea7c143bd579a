use super::{CHARS_PER_TOKEN, TokenizerError};

/// Counts tokens the way the target model's vocabulary does
pub trait TokenCounter: Send + Sync {
    /// Number of tokens `text` occupies
    fn count(&self, text: &str) -> usize;

    /// Longest prefix of `text` that fits in `max_tokens` tokens
    fn truncate(&self, text: &str, max_tokens: usize) -> String;
}

/// BPE token counter backed by tiktoken
pub struct TiktokenCounter {
    model: String,
    bpe: tiktoken_rs::CoreBPE,
}

impl TiktokenCounter {
    /// Load the encoding used by `model`.
    ///
    /// There is no fallback: token budgets are only meaningful in the
    /// vocabulary of the model that receives the request.
    pub fn for_model(model: &str) -> Result<Self, TokenizerError> {
        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|_| TokenizerError::UnknownModel(model.to_string()))?;

        Ok(Self {
            model: model.to_string(),
            bpe,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TokenCounter for TiktokenCounter {
    fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    fn truncate(&self, text: &str, max_tokens: usize) -> String {
        let tokens = self.bpe.encode_with_special_tokens(text);
        if tokens.len() <= max_tokens {
            return text.to_string();
        }

        // A cut can land inside a multi-byte character; back off until the
        // prefix decodes cleanly.
        let mut end = max_tokens;
        while end > 0 {
            if let Ok(prefix) = self.bpe.decode(tokens[..end].to_vec()) {
                return prefix;
            }
            end -= 1;
        }

        String::new()
    }
}

/// Character-based token estimate, roughly 4 characters per token.
///
/// Needs no vocabulary data, which makes it handy for tests and dry runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharEstimateCounter;

impl TokenCounter for CharEstimateCounter {
    fn count(&self, text: &str) -> usize {
        text.chars().count().div_ceil(CHARS_PER_TOKEN)
    }

    fn truncate(&self, text: &str, max_tokens: usize) -> String {
        let max_chars = max_tokens.saturating_mul(CHARS_PER_TOKEN);
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => text[..byte_idx].to_string(),
            None => text.to_string(),
        }
    }
}
