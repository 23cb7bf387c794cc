//! In-memory notebook store with lexical search

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::types::response::NotebookSummary;
use crate::types::{Chunk, ChunkMetadata};

use super::score::{JaccardScorer, SimilarityScorer};
use super::tokenizer;

/// Search result exposing a chunk's text and metadata (never the term set)
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The retrieved chunk text
    pub text: String,
    /// Source metadata for citations
    pub metadata: ChunkMetadata,
    /// Lexical similarity score (0.0-1.0, higher is better)
    pub score: f32,
}

/// One notebook's ordered chunk sequence
struct Notebook {
    chunks: Vec<Chunk>,
    created_at: DateTime<Utc>,
}

impl Notebook {
    fn new() -> Self {
        Self {
            chunks: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory store mapping notebook ids to their ingested chunks
///
/// Constructed once by the hosting application and shared by handle. Appends to
/// a notebook serialize on that notebook's map entry, so concurrent ingestions
/// cannot race on the next chunk index and a search never observes a partially
/// appended chunk. Memory grows monotonically: there is no eviction policy and
/// no delete operation.
pub struct NotebookStore {
    notebooks: DashMap<String, Notebook>,
    scorer: Box<dyn SimilarityScorer>,
}

impl NotebookStore {
    /// Create a store with the default Jaccard scorer
    pub fn new() -> Self {
        Self::with_scorer(Box::new(JaccardScorer))
    }

    /// Create a store with a custom scoring strategy
    pub fn with_scorer(scorer: Box<dyn SimilarityScorer>) -> Self {
        Self {
            notebooks: DashMap::new(),
            scorer,
        }
    }

    /// Append chunk texts to a notebook, tokenizing each and assigning the next
    /// contiguous indices
    ///
    /// Creates the notebook on first use; an empty `texts` leaves the store
    /// untouched (no empty notebook entry is created). Re-ingesting identical
    /// content creates new chunks with new indices; there is no deduplication.
    /// Returns the number of chunks appended.
    pub fn append<I>(&self, notebook_id: &str, texts: I, file_name: &str) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut texts = texts.into_iter().peekable();
        if texts.peek().is_none() {
            return 0;
        }

        let mut entry = self
            .notebooks
            .entry(notebook_id.to_string())
            .or_insert_with(Notebook::new);
        let notebook = entry.value_mut();

        let mut added = 0;
        for text in texts {
            let index = notebook.chunks.len() as u32;
            notebook.chunks.push(Chunk::new(
                notebook_id.to_string(),
                index,
                file_name.to_string(),
                text,
            ));
            added += 1;
        }

        tracing::debug!(
            "Appended {} chunks from '{}' to notebook '{}' ({} total)",
            added,
            file_name,
            notebook_id,
            notebook.chunks.len()
        );

        added
    }

    /// Get all chunks of a notebook in index order
    ///
    /// An unknown notebook id yields an empty sequence, never an error.
    pub fn get(&self, notebook_id: &str) -> Vec<Chunk> {
        self.notebooks
            .get(notebook_id)
            .map(|nb| nb.chunks.clone())
            .unwrap_or_default()
    }

    /// Rank a notebook's chunks against a query and return the top `k`
    ///
    /// `k` is an upper bound: the result length is `min(k, chunk count)`, and
    /// `k == 0` is normalized to 1. Ties break by ascending chunk index so
    /// earlier-ingested content wins deterministically. Unknown or empty
    /// notebooks yield an empty sequence.
    pub fn search(&self, notebook_id: &str, query: &str, k: usize) -> Vec<SearchResult> {
        let k = k.max(1);

        let notebook = match self.notebooks.get(notebook_id) {
            Some(nb) => nb,
            None => return Vec::new(),
        };

        let query_terms = tokenizer::term_set(query);

        let mut results: Vec<SearchResult> = notebook
            .chunks
            .iter()
            .map(|chunk| SearchResult {
                text: chunk.text.clone(),
                metadata: chunk.metadata.clone(),
                score: self.scorer.score(&query_terms, &chunk.term_set),
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.metadata.chunk_index.cmp(&b.metadata.chunk_index))
        });
        results.truncate(k);

        results
    }

    /// Summaries of all notebooks, sorted by id
    pub fn list(&self) -> Vec<NotebookSummary> {
        let mut summaries: Vec<NotebookSummary> = self
            .notebooks
            .iter()
            .map(|entry| summarize(entry.key(), entry.value()))
            .collect();
        summaries.sort_by(|a, b| a.notebook_id.cmp(&b.notebook_id));
        summaries
    }

    /// Summary of one notebook, if it exists
    pub fn summary(&self, notebook_id: &str) -> Option<NotebookSummary> {
        self.notebooks
            .get(notebook_id)
            .map(|nb| summarize(notebook_id, &nb))
    }
}

impl Default for NotebookStore {
    fn default() -> Self {
        Self::new()
    }
}

fn summarize(notebook_id: &str, notebook: &Notebook) -> NotebookSummary {
    let mut file_names: Vec<String> = Vec::new();
    for chunk in &notebook.chunks {
        if !file_names.contains(&chunk.metadata.file_name) {
            file_names.push(chunk.metadata.file_name.clone());
        }
    }

    NotebookSummary {
        notebook_id: notebook_id.to_string(),
        chunk_count: notebook.chunks.len(),
        file_names,
        created_at: notebook.created_at,
    }
}
