//! Core types for the notebook RAG system

pub mod chunk;
pub mod query;
pub mod response;

pub use chunk::{Chunk, ChunkMetadata};
pub use query::{ChatRequest, FlashcardRequest, QuizRequest, StudyGuideRequest};
pub use response::{
    ChatResponse, Flashcard, FlashcardResponse, IngestResponse, NotebookSummary, QuizQuestion,
    QuizResponse, SourceRef, StudyGuideResponse,
};
