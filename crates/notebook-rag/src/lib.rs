//! notebook-rag: notebook-scoped document Q&A with lexical retrieval
//!
//! Users upload short documents into a named "notebook" and query it through an
//! LLM: free-form questions, a study guide, flashcards, or a multiple-choice
//! quiz. Retrieval is lexical (set-overlap scoring over tokenized chunks) and
//! entirely in-memory; the language model is an opaque text-completion service
//! reached over HTTP.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use ingestion::{FileParser, IngestPipeline, TextChunker};
pub use retrieval::{JaccardScorer, NotebookStore, SearchResult, SimilarityScorer};
pub use types::{Chunk, ChunkMetadata};
