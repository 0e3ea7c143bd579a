use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences, in original order
pub trait SentenceSegmenter: Send + Sync {
    /// Sentences of `text` with surrounding whitespace trimmed.
    ///
    /// Whitespace-only pieces are skipped; every other character of the
    /// input belongs to exactly one returned sentence.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// UAX #29 sentence boundaries
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
