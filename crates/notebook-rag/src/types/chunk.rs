//! Chunk types with source metadata for citations

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::retrieval::tokenizer;

/// Source metadata carried by every chunk
///
/// Exposed to callers in search results and chat citations; the term set is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Notebook the chunk belongs to
    pub notebook_id: String,
    /// Position within the notebook (contiguous across successive ingestions)
    pub chunk_index: u32,
    /// Name of the uploaded file the chunk came from
    pub file_name: String,
}

/// A bounded slice of an ingested document, plus its tokenized representation
///
/// Immutable once created and owned exclusively by the [`NotebookStore`]
/// holding it.
///
/// [`NotebookStore`]: crate::retrieval::NotebookStore
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Raw chunk text
    pub text: String,
    /// Source metadata
    pub metadata: ChunkMetadata,
    /// Normalized terms of `text`, duplicates collapsed
    pub term_set: HashSet<String>,
}

impl Chunk {
    /// Create a chunk, deriving its term set from the text
    pub fn new(notebook_id: String, chunk_index: u32, file_name: String, text: String) -> Self {
        let term_set = tokenizer::term_set(&text);
        Self {
            text,
            metadata: ChunkMetadata {
                notebook_id,
                chunk_index,
                file_name,
            },
            term_set,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_set_is_derived_from_text() {
        let chunk = Chunk::new(
            "nb".to_string(),
            0,
            "notes.txt".to_string(),
            "Dogs are loyal. Dogs bark!".to_string(),
        );

        assert!(chunk.term_set.contains("dogs"));
        assert!(chunk.term_set.contains("loyal"));
        assert!(chunk.term_set.contains("bark"));
        // duplicates collapse
        assert_eq!(chunk.term_set.len(), 4);
    }
}
