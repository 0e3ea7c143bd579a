mod splitter;


pub use splitter::{Chunk, chunk_text};

/// Maximum tokens per chunk (and per request) when none is configured
pub const DEFAULT_TOKEN_LIMIT: usize = 3000;
