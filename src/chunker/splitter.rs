use crate::tokens::{SentenceSegmenter, TokenCounter};

/// A sentence-aligned slice of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Sentences in original order
    pub sentences: Vec<String>,
    /// Running token total charged to this chunk while it was built
    pub token_count: usize,
}

impl Chunk {
    fn whole(text: &str, token_count: usize) -> Self {
        Self {
            sentences: vec![text.to_string()],
            token_count,
        }
    }

    /// The chunk as a single string, sentences joined by single spaces
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// True for a lone sentence that could not be kept under `token_limit`
    pub fn is_oversized(&self, token_limit: usize) -> bool {
        self.token_count > token_limit
    }
}

/// Partition text into token-bounded chunks along sentence boundaries.
///
/// Rules:
/// - Text that already fits is returned as one chunk, unsegmented, even
///   when it is empty
/// - Sentences are packed greedily in order, never reordered or dropped
/// - On rollover the running total restarts at the new sentence's count
/// - A sentence larger than `token_limit` gets a chunk to itself and is
///   forwarded as-is; sentences are never split further
pub fn chunk_text(
    text: &str,
    token_limit: usize,
    counter: &dyn TokenCounter,
    segmenter: &dyn SentenceSegmenter,
) -> Vec<Chunk> {
    let total_tokens = counter.count(text);
    if total_tokens <= token_limit {
        return vec![Chunk::whole(text, total_tokens)];
    }

    let mut chunks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut running_total = 0;

    for sentence in segmenter.segment(text) {
        let sentence_tokens = counter.count(sentence);

        if running_total + sentence_tokens > token_limit {
            // Only roll over a chunk that holds something
            if !current.is_empty() {
                chunks.push(Chunk {
                    sentences: std::mem::take(&mut current),
                    token_count: running_total,
                });
            }
            running_total = sentence_tokens;
        } else {
            running_total += sentence_tokens;
        }

        if sentence_tokens > token_limit {
            tracing::warn!(
                tokens = sentence_tokens,
                token_limit,
                "Sentence exceeds token limit; forwarding it as its own chunk"
            );
        }

        current.push(sentence.to_string());
    }

    if !current.is_empty() {
        chunks.push(Chunk {
            sentences: current,
            token_count: running_total,
        });
    }

    tracing::debug!(
        total_tokens,
        token_limit,
        chunks = chunks.len(),
        "Chunked text"
    );

    chunks
}
