//! Study aid endpoints: study guide, flashcards, quiz

use axum::{
    extract::{Path, State},
    Json,
};
use std::time::Instant;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{
    query::{FlashcardRequest, QuizRequest, StudyGuideRequest},
    response::{FlashcardResponse, QuizResponse, StudyGuideResponse},
};

/// POST /api/notebooks/:notebook_id/study-guide - Generate a study guide
pub async fn study_guide(
    State(state): State<AppState>,
    Path(notebook_id): Path<String>,
    Json(request): Json<StudyGuideRequest>,
) -> Result<Json<StudyGuideResponse>> {
    let start = Instant::now();

    let guide = state
        .assistant()
        .study_guide(&notebook_id, &request.level)
        .await?;

    Ok(Json(StudyGuideResponse {
        success: true,
        guide,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}

/// POST /api/notebooks/:notebook_id/flashcards - Generate flashcards
pub async fn flashcards(
    State(state): State<AppState>,
    Path(notebook_id): Path<String>,
    Json(request): Json<FlashcardRequest>,
) -> Result<Json<FlashcardResponse>> {
    let start = Instant::now();

    let cards = state
        .assistant()
        .flashcards(&notebook_id, request.count)
        .await?;

    tracing::info!(
        "Generated {} flashcards for notebook '{}'",
        cards.len(),
        notebook_id
    );

    Ok(Json(FlashcardResponse {
        success: true,
        cards,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}

/// POST /api/notebooks/:notebook_id/quiz - Generate a multiple-choice quiz
pub async fn quiz(
    State(state): State<AppState>,
    Path(notebook_id): Path<String>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>> {
    let start = Instant::now();

    let questions = state.assistant().quiz(&notebook_id, request.count).await?;

    tracing::info!(
        "Generated {} quiz questions for notebook '{}'",
        questions.len(),
        notebook_id
    );

    Ok(Json(QuizResponse {
        success: true,
        questions,
        processing_time_ms: start.elapsed().as_millis() as u64,
    }))
}
