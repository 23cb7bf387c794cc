//! Chat endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{query::ChatRequest, response::ChatResponse};

/// POST /api/notebooks/:notebook_id/chat - Ask the notebook a question
pub async fn chat_with_notebook(
    State(state): State<AppState>,
    Path(notebook_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let start = Instant::now();

    tracing::info!("Chat on notebook '{}': \"{}\"", notebook_id, request.question);

    let answer = state
        .assistant()
        .ask(&notebook_id, &request.question, request.top_k)
        .await?;

    Ok(Json(ChatResponse {
        success: true,
        answer: answer.answer,
        sources: answer.sources,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}
