//! Ingestion pipeline orchestration

use crate::error::Result;
use crate::retrieval::NotebookStore;

use super::chunker::TextChunker;

/// Outcome of ingesting one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Number of chunks appended to the notebook
    pub chunks_added: usize,
}

/// Ingestion pipeline: raw text in, notebook chunks out
pub struct IngestPipeline {
    chunker: TextChunker,
}

impl IngestPipeline {
    /// Create a pipeline with the given chunking parameters
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Ok(Self {
            chunker: TextChunker::new(chunk_size, chunk_overlap)?,
        })
    }

    /// Chunk raw text and append the chunks to a notebook
    ///
    /// Empty raw text yields `chunks_added == 0` and leaves the store
    /// untouched.
    pub fn ingest(
        &self,
        store: &NotebookStore,
        notebook_id: &str,
        raw_text: &str,
        file_name: &str,
    ) -> IngestOutcome {
        let chunks = self.chunker.split(raw_text);
        let chunks_added = store.append(notebook_id, chunks, file_name);

        tracing::info!(
            "Ingested '{}' into notebook '{}': {} chunks",
            file_name,
            notebook_id,
            chunks_added
        );

        IngestOutcome { chunks_added }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_adds_nothing() {
        let store = NotebookStore::new();
        let pipeline = IngestPipeline::new(1000, 200).expect("valid config");

        let outcome = pipeline.ingest(&store, "demo", "", "empty.txt");

        assert_eq!(outcome.chunks_added, 0);
        assert!(store.get("demo").is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn ingest_then_search_finds_the_relevant_chunk() {
        let store = NotebookStore::new();
        let pipeline = IngestPipeline::new(20, 5).expect("valid config");

        let outcome = pipeline.ingest(
            &store,
            "demo",
            "Dogs are loyal. Cats are independent.",
            "pets.txt",
        );
        assert!(outcome.chunks_added >= 2);

        let results = store.search("demo", "dogs", 5);
        assert!(results[0].text.contains("Dogs"));
        assert!(results[0].score > 0.0);
        assert_eq!(results[0].metadata.file_name, "pets.txt");
    }

    #[test]
    fn second_upload_continues_the_index_sequence() {
        let store = NotebookStore::new();
        let pipeline = IngestPipeline::new(1000, 200).expect("valid config");

        pipeline.ingest(&store, "demo", "First document.", "a.txt");
        pipeline.ingest(&store, "demo", "Second document.", "b.txt");

        let chunks = store.get("demo");
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].metadata.chunk_index, 0);
        assert_eq!(chunks[1].metadata.chunk_index, 1);
    }
}
