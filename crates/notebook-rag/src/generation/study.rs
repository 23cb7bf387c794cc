//! Notebook-level generation features: chat, study guide, flashcards, quiz

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::error::{Error, Result};
use crate::retrieval::NotebookStore;
use crate::types::response::{Flashcard, QuizQuestion, SourceRef};

use super::llm::LlmProvider;
use super::prompt::PromptBuilder;

/// Generic query used when a feature wants broad notebook coverage rather
/// than an answer to a specific question
const OVERVIEW_QUERY: &str = "overview";

/// A chat answer with the sources it was grounded on
#[derive(Debug, Clone)]
pub struct ChatAnswer {
    /// Generated answer text
    pub answer: String,
    /// Retrieved chunks backing the answer, in retrieval order
    pub sources: Vec<SourceRef>,
}

/// LLM-backed operations over a notebook's stored chunks
pub struct NotebookAssistant {
    store: Arc<NotebookStore>,
    llm: Arc<dyn LlmProvider>,
    retrieval: RetrievalConfig,
}

impl NotebookAssistant {
    /// Create an assistant over a shared store and LLM provider
    pub fn new(
        store: Arc<NotebookStore>,
        llm: Arc<dyn LlmProvider>,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            llm,
            retrieval,
        }
    }

    /// Answer a free-form question from the notebook's content
    ///
    /// Retrieves the `top_k` most similar chunks, assembles them into a
    /// context, and asks the model to answer from that context only. An
    /// unknown or empty notebook produces an empty context; the prompt then
    /// instructs the model to say it does not know.
    pub async fn ask(&self, notebook_id: &str, question: &str, top_k: usize) -> Result<ChatAnswer> {
        let results = self.store.search(notebook_id, question, top_k);
        let sources = results.iter().map(SourceRef::from_result).collect();

        let context = PromptBuilder::build_context(&results);
        let prompt = PromptBuilder::build_chat_prompt(question, &context);

        tracing::info!(
            "Chat on notebook '{}': {} context chunks, model {}",
            notebook_id,
            results.len(),
            self.llm.model()
        );

        let answer = self.llm.generate(&prompt).await?;

        Ok(ChatAnswer { answer, sources })
    }

    /// Generate a structured study guide from an overview of the notebook
    pub async fn study_guide(&self, notebook_id: &str, level: &str) -> Result<String> {
        let context = self.overview_context(notebook_id, self.retrieval.study_guide_k);
        let prompt = PromptBuilder::build_study_guide_prompt(&context, level);
        self.llm.generate(&prompt).await
    }

    /// Generate question/answer flashcards from an overview of the notebook
    pub async fn flashcards(&self, notebook_id: &str, count: usize) -> Result<Vec<Flashcard>> {
        let context = self.overview_context(notebook_id, self.retrieval.overview_k);
        let prompt = PromptBuilder::build_flashcards_prompt(&context, count);
        let raw = self.llm.generate(&prompt).await?;
        extract_json_array(&raw)
    }

    /// Generate a multiple-choice quiz from an overview of the notebook
    pub async fn quiz(&self, notebook_id: &str, count: usize) -> Result<Vec<QuizQuestion>> {
        let context = self.overview_context(notebook_id, self.retrieval.overview_k);
        let prompt = PromptBuilder::build_quiz_prompt(&context, count);
        let raw = self.llm.generate(&prompt).await?;
        extract_json_array(&raw)
    }

    /// Pull a broad context using the fixed overview query
    fn overview_context(&self, notebook_id: &str, limit: usize) -> String {
        let results = self.store.search(notebook_id, OVERVIEW_QUERY, limit);
        PromptBuilder::build_context(&results)
    }
}

/// Extract and parse the first JSON array in a model response
///
/// Models routinely wrap JSON in prose or code fences, so this slices from the
/// first `[` to the last `]` before parsing. Anything that still fails to
/// parse is surfaced as a malformed-output error rather than a panic.
fn extract_json_array<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    let start = raw.find('[');
    let end = raw.rfind(']');

    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(Error::ModelOutput(
                "response contains no JSON array".to_string(),
            ))
        }
    };

    serde_json::from_str(&raw[start..=end])
        .map_err(|e| Error::ModelOutput(format!("invalid JSON array: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Provider returning a fixed response, for exercising the parse path
    struct CannedLlm(&'static str);

    #[async_trait]
    impl LlmProvider for CannedLlm {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }

        async fn health_check(&self) -> Result<bool> {
            Ok(true)
        }

        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned"
        }
    }

    fn assistant(response: &'static str) -> (Arc<NotebookStore>, NotebookAssistant) {
        let store = Arc::new(NotebookStore::new());
        let assistant = NotebookAssistant::new(
            store.clone(),
            Arc::new(CannedLlm(response)),
            RetrievalConfig::default(),
        );
        (store, assistant)
    }

    #[test]
    fn extracts_json_array_from_surrounding_prose() {
        let raw = r#"Here are your cards:
[
  {"question": "Q1", "answer": "A1"},
  {"question": "Q2", "answer": "A2"}
]
Hope that helps!"#;

        let cards: Vec<Flashcard> = extract_json_array(raw).expect("parses");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "Q1");
    }

    #[test]
    fn missing_array_is_a_model_output_error() {
        let err = extract_json_array::<Flashcard>("no json here").unwrap_err();
        assert!(matches!(err, Error::ModelOutput(_)));
    }

    #[test]
    fn malformed_array_is_a_model_output_error() {
        let err = extract_json_array::<Flashcard>("[{\"question\": }]").unwrap_err();
        assert!(matches!(err, Error::ModelOutput(_)));
    }

    #[tokio::test]
    async fn ask_returns_sources_in_retrieval_order() {
        let (store, assistant) = assistant("Dogs are loyal, per the notes.");
        store.append(
            "demo",
            vec![
                "Cats are independent.".to_string(),
                "Dogs are loyal.".to_string(),
            ],
            "pets.txt",
        );

        let answer = assistant.ask("demo", "are dogs loyal?", 2).await.expect("answers");

        assert_eq!(answer.answer, "Dogs are loyal, per the notes.");
        assert_eq!(answer.sources.len(), 2);
        assert_eq!(answer.sources[0].chunk_index, 1);
    }

    #[tokio::test]
    async fn ask_on_unknown_notebook_still_answers_with_no_sources() {
        let (_store, assistant) = assistant("I don't know.");

        let answer = assistant.ask("missing", "anything", 5).await.expect("answers");

        assert_eq!(answer.answer, "I don't know.");
        assert!(answer.sources.is_empty());
    }

    #[tokio::test]
    async fn quiz_parses_typed_questions() {
        let (store, assistant) = assistant(
            r#"[{"question": "Are dogs loyal?", "options": ["yes", "no"], "correct_index": 0, "explanation": "The notes say so."}]"#,
        );
        store.append("demo", vec!["Dogs are loyal.".to_string()], "pets.txt");

        let questions = assistant.quiz("demo", 1).await.expect("parses");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_index, 0);
        assert_eq!(questions[0].options.len(), 2);
    }
}
