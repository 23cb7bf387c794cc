//! LLM-backed generation: prompt templates, the Ollama client, and the
//! notebook study features (chat, study guide, flashcards, quiz)

mod llm;
mod ollama;
mod prompt;
mod study;

pub use llm::LlmProvider;
pub use ollama::OllamaClient;
pub use prompt::PromptBuilder;
pub use study::{ChatAnswer, NotebookAssistant};
