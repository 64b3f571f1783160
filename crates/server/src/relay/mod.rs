//! Prompt construction and reply parsing for the move relay.

pub mod extract;
pub mod prompt;

use serde::{Deserialize, Serialize};

/// One ply of the game so far, in square coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    pub from: String,
    pub to: String,
}

/// Outcome of parsing an upstream reply.
///
/// `raw` is only present when no move could be extracted, so the caller can
/// decide on its own fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    #[serde(rename = "move")]
    pub mv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl MoveResult {
    pub fn from_reply(reply: &str) -> Self {
        match extract::extract_move(reply) {
            Some(mv) => Self {
                mv: Some(mv),
                raw: None,
            },
            None => Self {
                mv: None,
                raw: Some(reply.to_string()),
            },
        }
    }
}
