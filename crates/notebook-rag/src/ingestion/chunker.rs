//! Overlapping text chunking with natural breakpoints

use std::collections::VecDeque;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// Text chunker producing overlapping windows of bounded size
///
/// Windows are at most `chunk_size` characters and consecutive windows share up
/// to `overlap` characters of tail content. Boundaries prefer sentence breaks
/// (a paragraph break ends a sentence segment), then word breaks, and hard-cut
/// at a char boundary only when a single word exceeds the window. Chunks
/// concatenate back to the source text once the shared tails are removed, so
/// no input content is lost.
pub struct TextChunker {
    /// Maximum chunk size in characters
    chunk_size: usize,
    /// Tail characters carried into the next chunk
    overlap: usize,
}

impl TextChunker {
    /// Create a chunker, enforcing `chunk_size > overlap >= 0`
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::Config("chunk_size must be greater than zero".to_string()));
        }
        if overlap >= chunk_size {
            return Err(Error::Config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Split text into overlapping chunks
    ///
    /// Empty input yields an empty sequence; the final chunk may be shorter
    /// than `chunk_size`.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.merge(self.fragments(text))
    }

    /// Break text into fragments no longer than `chunk_size`, preferring
    /// sentence boundaries, then word boundaries, then char-boundary cuts
    fn fragments<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut fragments = Vec::new();

        for sentence in text.split_sentence_bounds() {
            if sentence.len() <= self.chunk_size {
                fragments.push(sentence);
                continue;
            }

            for word in sentence.split_word_bounds() {
                if word.len() <= self.chunk_size {
                    fragments.push(word);
                } else {
                    hard_cut(word, self.chunk_size, &mut fragments);
                }
            }
        }

        fragments
    }

    /// Greedily pack fragments into windows, carrying a tail of up to
    /// `overlap` characters from each emitted chunk into the next
    fn merge(&self, fragments: Vec<&str>) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut window_len = 0usize;

        for fragment in fragments {
            if window_len + fragment.len() > self.chunk_size && !window.is_empty() {
                chunks.push(concat(&window));

                // shrink the window to the overlap tail, dropping further if
                // the incoming fragment still would not fit
                while window_len > self.overlap
                    || (window_len + fragment.len() > self.chunk_size && window_len > 0)
                {
                    match window.pop_front() {
                        Some(dropped) => window_len -= dropped.len(),
                        None => break,
                    }
                }
            }

            window.push_back(fragment);
            window_len += fragment.len();
        }

        // the window always holds at least one fragment not yet emitted
        if !window.is_empty() {
            chunks.push(concat(&window));
        }

        chunks
    }
}

fn concat(window: &VecDeque<&str>) -> String {
    window.iter().copied().collect()
}

/// Cut an oversized word at char boundaries into pieces of at most `max` bytes
///
/// A piece never splits a code point, so with a `max` smaller than one code
/// point the piece holds exactly that code point.
fn hard_cut<'a>(word: &'a str, max: usize, out: &mut Vec<&'a str>) {
    let mut start = 0;
    while start < word.len() {
        let mut end = (start + max).min(word.len());
        while end > start && !word.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            end = word[start..]
                .chars()
                .next()
                .map(|c| start + c.len_utf8())
                .unwrap_or(word.len());
        }
        out.push(&word[start..end]);
        start = end;
    }
}
