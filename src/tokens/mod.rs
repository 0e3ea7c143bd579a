mod counter;
mod error;
mod segmenter;


pub use counter::{CharEstimateCounter, TiktokenCounter, TokenCounter};
pub use error::TokenizerError;
pub use segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};

/// Average characters per token for English text
pub const CHARS_PER_TOKEN: usize = 4;
