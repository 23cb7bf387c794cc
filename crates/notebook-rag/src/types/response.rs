//! Response types for the notebook endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::retrieval::SearchResult;

/// Reference to a source chunk backing an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    /// Name of the uploaded file the chunk came from
    pub file_name: String,
    /// Position of the chunk within its notebook
    pub chunk_index: u32,
    /// Lexical similarity score (0.0-1.0, higher is better)
    pub score: f32,
}

impl SourceRef {
    /// Build a source reference from a search result
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            file_name: result.metadata.file_name.clone(),
            chunk_index: result.metadata.chunk_index,
            score: result.score,
        }
    }
}

/// Response to a document upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub success: bool,
    pub notebook_id: String,
    pub file_name: String,
    pub chunks_added: usize,
    pub processing_time_ms: u64,
}

/// Response to a chat question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    /// Generated answer
    pub answer: String,
    /// Chunks the answer was grounded on, in retrieval order
    pub sources: Vec<SourceRef>,
    pub processing_time_ms: u64,
}

/// Response carrying a generated study guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGuideResponse {
    pub success: bool,
    pub guide: String,
    pub processing_time_ms: u64,
}

/// A single question/answer flashcard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Response carrying generated flashcards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardResponse {
    pub success: bool,
    pub cards: Vec<Flashcard>,
    pub processing_time_ms: u64,
}

/// A single multiple-choice quiz question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Response carrying a generated quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub questions: Vec<QuizQuestion>,
    pub processing_time_ms: u64,
}

/// Summary of a notebook's contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotebookSummary {
    pub notebook_id: String,
    /// Number of chunks currently stored
    pub chunk_count: usize,
    /// Distinct source file names, in first-ingestion order
    pub file_names: Vec<String>,
    /// When the notebook was implicitly created
    pub created_at: DateTime<Utc>,
}
