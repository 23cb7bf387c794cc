//! Notebook listing endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::response::NotebookSummary;

/// GET /api/notebooks - List all notebooks
pub async fn list_notebooks(State(state): State<AppState>) -> Json<Vec<NotebookSummary>> {
    Json(state.store().list())
}

/// GET /api/notebooks/:notebook_id - Get one notebook's summary
pub async fn get_notebook(
    State(state): State<AppState>,
    Path(notebook_id): Path<String>,
) -> Result<Json<NotebookSummary>> {
    state
        .store()
        .summary(&notebook_id)
        .map(Json)
        .ok_or(Error::NotebookNotFound(notebook_id))
}
