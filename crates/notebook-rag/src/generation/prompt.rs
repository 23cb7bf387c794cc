//! Prompt templates for the notebook features

use crate::retrieval::SearchResult;

/// Prompt builder for notebook queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join search results into a single context string
    ///
    /// Items keep the order Similarity Search returned them, each labeled with
    /// a 1-based position and its source file name. Pure formatting, no
    /// ranking logic.
    pub fn build_context(results: &[SearchResult]) -> String {
        results
            .iter()
            .enumerate()
            .map(|(i, result)| {
                format!(
                    "Chunk {} (source: {}):\n{}",
                    i + 1,
                    result.metadata.file_name,
                    result.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build a question-answering prompt over notebook context
    pub fn build_chat_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are an AI research assistant. Answer using ONLY the context provided.
If the answer is not in the context, say you don't know.
Provide clear, structured answers.

Context:
{context}

Question: {question}"#
        )
    }

    /// Build a study guide prompt
    pub fn build_study_guide_prompt(context: &str, level: &str) -> String {
        format!(
            r#"You are an AI tutor. Based on the context below, create a structured study guide.
Explain in {level} language.

Context:
{context}

Study Guide Format:
1. Overview (3-5 sentences)
2. Key Concepts (bullet points)
3. Important Definitions
4. Examples (if possible)
5. Possible Exam/Interview Questions"#
        )
    }

    /// Build a flashcard generation prompt
    pub fn build_flashcards_prompt(context: &str, count: usize) -> String {
        format!(
            r#"Create {count} question/answer flashcards from the following context.
Return a JSON array of objects like:
[
  {{"question": "...", "answer": "..."}},
  ...
]

Context:
{context}"#
        )
    }

    /// Build a multiple-choice quiz prompt
    pub fn build_quiz_prompt(context: &str, count: usize) -> String {
        format!(
            r#"Create a quiz of {count} multiple-choice questions based on the context.
Format as JSON:
[
  {{
    "question": "...",
    "options": ["A", "B", "C", "D"],
    "correct_index": 0,
    "explanation": "..."
  }}
]

Context:
{context}"#
        )
    }
}
