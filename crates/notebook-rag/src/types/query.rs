//! Request types for the notebook endpoints

use serde::{Deserialize, Serialize};

/// Chat request against a notebook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question to answer
    pub question: String,

    /// Number of chunks to retrieve as context (default: 5)
    #[serde(default = "default_chat_top_k")]
    pub top_k: usize,
}

fn default_chat_top_k() -> usize {
    5
}

/// Study guide generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGuideRequest {
    /// Explanation level, e.g. "simple" or "advanced" (default: "simple")
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "simple".to_string()
}

/// Flashcard generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardRequest {
    /// Number of cards to generate (default: 15)
    #[serde(default = "default_flashcard_count")]
    pub count: usize,
}

fn default_flashcard_count() -> usize {
    15
}

/// Quiz generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Number of questions to generate (default: 10)
    #[serde(default = "default_quiz_count")]
    pub count: usize,
}

fn default_quiz_count() -> usize {
    10
}
