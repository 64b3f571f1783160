use axum::{extract::rejection::JsonRejection, Extension, Json};
use serde::Deserialize;

use crate::clients::openai::ChatClient;
use crate::error::AppError;
use crate::relay::{prompt, HistoryEntry, MoveResult};

#[derive(Deserialize)]
pub struct AiMoveRequest {
    pub fen: Option<String>,
    pub history: Option<Vec<HistoryEntry>>,
}

/// POST /ai-move
/// Ask the upstream model for a move in the given position.
/// A reply without a recognizable move is still a 200, with `move: null` and the raw text.
pub async fn ai_move(
    Extension(client): Extension<ChatClient>,
    body: Result<Json<AiMoveRequest>, JsonRejection>,
) -> Result<Json<MoveResult>, AppError> {
    let Json(req) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let fen = req
        .fen
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing required field: fen".into()))?;
    let history = req.history.unwrap_or_default();

    tracing::info!(plies = history.len(), "Requesting move from upstream");

    let prompt = prompt::build_prompt(fen, &history);
    let reply = client.complete(&prompt).await?;
    tracing::debug!(reply = %reply, "Upstream reply");

    let result = MoveResult::from_reply(&reply);
    match &result.mv {
        Some(mv) => tracing::info!(mv = %mv, "Parsed move"),
        None => tracing::warn!("No move found in upstream reply"),
    }

    Ok(Json(result))
}
