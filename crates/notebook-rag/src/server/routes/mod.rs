//! API routes for the notebook server

pub mod chat;
pub mod ingest;
pub mod notebooks;
pub mod study;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Notebook listing
        .route("/notebooks", get(notebooks::list_notebooks))
        .route("/notebooks/:notebook_id", get(notebooks::get_notebook))
        // Ingestion - with larger body limit for file uploads
        .route(
            "/notebooks/:notebook_id/ingest",
            post(ingest::ingest_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Chat
        .route("/notebooks/:notebook_id/chat", post(chat::chat_with_notebook))
        // Study aids
        .route("/notebooks/:notebook_id/study-guide", post(study::study_guide))
        .route("/notebooks/:notebook_id/flashcards", post(study::flashcards))
        .route("/notebooks/:notebook_id/quiz", post(study::quiz))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "notebook-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Notebook-scoped document Q&A with lexical retrieval",
        "endpoints": {
            "POST /api/notebooks/:id/ingest": "Upload a document (pdf/txt/md)",
            "POST /api/notebooks/:id/chat": "Ask a question",
            "POST /api/notebooks/:id/study-guide": "Generate a study guide",
            "POST /api/notebooks/:id/flashcards": "Generate flashcards",
            "POST /api/notebooks/:id/quiz": "Generate a quiz",
            "GET /api/notebooks": "List notebooks",
            "GET /api/notebooks/:id": "Notebook summary"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RagConfig;
    use crate::error::Result;
    use crate::generation::LlmProvider;
    use crate::types::response::{ChatResponse, IngestResponse, NotebookSummary};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Provider returning a fixed response, so route tests need no Ollama
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

    fn test_app(llm_response: &'static str) -> (AppState, Router) {
        let state = AppState::with_provider(RagConfig::default(), Arc::new(CannedLlm(llm_response)))
            .expect("valid default config");
        let router = Router::new()
            .nest("/api", api_routes(1024 * 1024))
            .with_state(state.clone());
        (state, router)
    }

    fn multipart_upload(uri: &str, file_name: &str, content: &str) -> Request<Body> {
        let boundary = "notebook-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {content}\r\n\
             --{boundary}--\r\n"
        );
        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("valid request")
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        serde_json::from_slice(&bytes).expect("valid JSON body")
    }

    #[tokio::test]
    async fn ingest_creates_chunks_and_reports_count() {
        let (_state, app) = test_app("unused");

        let response = app
            .oneshot(multipart_upload(
                "/api/notebooks/demo/ingest",
                "pets.txt",
                "Dogs are loyal. Cats are independent.",
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body: IngestResponse = json_body(response).await;
        assert!(body.success);
        assert_eq!(body.notebook_id, "demo");
        assert_eq!(body.file_name, "pets.txt");
        assert!(body.chunks_added >= 1);
    }

    #[tokio::test]
    async fn ingest_without_file_field_is_a_client_error() {
        let (_state, app) = test_app("unused");

        let boundary = "notebook-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"other\"\r\n\r\n\
             value\r\n\
             --{boundary}--\r\n"
        );
        let request = Request::post("/api/notebooks/demo/ingest")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("valid request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ingest_rejects_unsupported_file_types() {
        let (_state, app) = test_app("unused");

        let response = app
            .oneshot(multipart_upload(
                "/api/notebooks/demo/ingest",
                "slides.pptx",
                "not really a pptx",
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_answers_with_sources() {
        let (state, app) = test_app("Dogs are loyal, per the notes.");
        state.pipeline().ingest(
            state.store(),
            "demo",
            "Dogs are loyal. Cats are independent.",
            "pets.txt",
        );

        let request = Request::post("/api/notebooks/demo/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"question": "are dogs loyal?"}"#))
            .expect("valid request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body: ChatResponse = json_body(response).await;
        assert_eq!(body.answer, "Dogs are loyal, per the notes.");
        assert!(!body.sources.is_empty());
        assert_eq!(body.sources[0].file_name, "pets.txt");
    }

    #[tokio::test]
    async fn notebook_listing_reflects_ingestions() {
        let (state, app) = test_app("unused");
        state
            .pipeline()
            .ingest(state.store(), "demo", "Some notes.", "notes.txt");

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/notebooks")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let notebooks: Vec<NotebookSummary> = json_body(response).await;
        assert_eq!(notebooks.len(), 1);
        assert_eq!(notebooks[0].notebook_id, "demo");

        let response = app
            .oneshot(
                Request::get("/api/notebooks/missing")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn quiz_surfaces_malformed_model_output_as_bad_gateway() {
        let (state, app) = test_app("sorry, I cannot produce JSON today");
        state
            .pipeline()
            .ingest(state.store(), "demo", "Some notes.", "notes.txt");

        let request = Request::post("/api/notebooks/demo/quiz")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .expect("valid request");

        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
