//! Application state for the notebook server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::{LlmProvider, NotebookAssistant, OllamaClient};
use crate::ingestion::IngestPipeline;
use crate::retrieval::NotebookStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// In-memory notebook store
    store: Arc<NotebookStore>,
    /// Ingestion pipeline (parser output -> chunks -> store)
    pipeline: IngestPipeline,
    /// LLM-backed notebook operations
    assistant: NotebookAssistant,
}

impl AppState {
    /// Create application state with an Ollama provider from the configuration
    pub fn new(config: RagConfig) -> Result<Self> {
        let llm: Arc<dyn LlmProvider> = Arc::new(OllamaClient::new(&config.llm));
        Self::with_provider(config, llm)
    }

    /// Create application state with an explicit LLM provider
    ///
    /// The seam used by tests and by hosts that bring their own completion
    /// service.
    pub fn with_provider(config: RagConfig, llm: Arc<dyn LlmProvider>) -> Result<Self> {
        config.validate()?;

        let store = Arc::new(NotebookStore::new());
        let pipeline =
            IngestPipeline::new(config.chunking.chunk_size, config.chunking.chunk_overlap)?;
        let assistant =
            NotebookAssistant::new(store.clone(), llm.clone(), config.retrieval.clone());

        tracing::info!(
            "Application state initialized (model: {}, chunk size: {}, overlap: {})",
            llm.model(),
            config.chunking.chunk_size,
            config.chunking.chunk_overlap
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                pipeline,
                assistant,
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the notebook store
    pub fn store(&self) -> &NotebookStore {
        &self.inner.store
    }

    /// Get the ingestion pipeline
    pub fn pipeline(&self) -> &IngestPipeline {
        &self.inner.pipeline
    }

    /// Get the notebook assistant
    pub fn assistant(&self) -> &NotebookAssistant {
        &self.inner.assistant
    }
}
