//! Notebook RAG server binary
//!
//! Run with: cargo run -p notebook-rag --bin notebook-rag-server

use notebook_rag::generation::{LlmProvider, OllamaClient};
use notebook_rag::server::NotebookServer;
use notebook_rag::RagConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notebook_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                      AI Notebook Server                   ║
║        Document Q&A, Study Guides, Flashcards, Quiz       ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config = RagConfig::default();
    config.validate()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.generate_model);
    tracing::info!("  - Chunk size: {}", config.chunking.chunk_size);
    tracing::info!("  - Chunk overlap: {}", config.chunking.chunk_overlap);

    // Check Ollama
    tracing::info!("Checking Ollama at {}...", config.llm.base_url);
    let ollama = OllamaClient::new(&config.llm);
    match ollama.health_check().await {
        Ok(true) => tracing::info!("Ollama is running"),
        _ => {
            tracing::warn!("Ollama not available at {}", config.llm.base_url);
            tracing::warn!("Please start Ollama:");
            tracing::warn!("  1. Start: ollama serve");
            tracing::warn!("  2. Pull the model: ollama pull {}", config.llm.generate_model);
        }
    }

    // Create and start server
    let server = NotebookServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  POST /api/notebooks/:id/ingest      - Upload a document");
    println!("  POST /api/notebooks/:id/chat        - Ask a question");
    println!("  POST /api/notebooks/:id/study-guide - Generate a study guide");
    println!("  POST /api/notebooks/:id/flashcards  - Generate flashcards");
    println!("  POST /api/notebooks/:id/quiz        - Generate a quiz");
    println!("  GET  /api/notebooks                 - List notebooks");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
