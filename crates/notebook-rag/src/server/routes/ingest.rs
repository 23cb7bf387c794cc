//! Document ingestion endpoint

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::time::Instant;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::ingestion::FileParser;
use crate::server::state::AppState;
use crate::types::response::IngestResponse;

/// POST /api/notebooks/:notebook_id/ingest - Upload a document into a notebook
///
/// Expects a multipart body with a single `file` field. The notebook is
/// created implicitly on first ingestion.
pub async fn ingest_document(
    State(state): State<AppState>,
    Path(notebook_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>> {
    let start = Instant::now();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Internal(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("upload_{}.txt", Uuid::new_v4()));

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Internal(format!("Failed to read file: {}", e)))?;

        tracing::info!(
            "Processing upload: {} ({} bytes) for notebook '{}'",
            file_name,
            data.len(),
            notebook_id
        );

        let raw_text = FileParser::parse(&file_name, &data)?;
        let outcome = state
            .pipeline()
            .ingest(state.store(), &notebook_id, &raw_text, &file_name);

        return Ok(Json(IngestResponse {
            success: true,
            notebook_id,
            file_name,
            chunks_added: outcome.chunks_added,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }));
    }

    Err(Error::MissingFile)
}
