use super::HistoryEntry;

/// Output-format contract handed to the model as the system turn.
pub const SYSTEM_INSTRUCTION: &str = "You are a chess engine. \
Reply with exactly one move in UCI coordinate notation: \
<from-file><from-rank><to-file><to-rank>, followed by a promotion piece letter (q, r, b or n) only when promoting, \
for example e2e4 or e7e8q. \
Do not add commentary, explanations, punctuation, JSON or any other text. \
Avoid castling if unclear. \
If you cannot find a legal move, reply with PASS.";

/// The two role-tagged turns sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamPrompt {
    pub system: String,
    pub user: String,
}

/// Render the history as `1. e2-e4, 2. e7-e5, ...`, or `(none)` before the first move.
pub fn format_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "(none)".to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}-{}", i + 1, entry.from, entry.to))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prompt(fen: &str, history: &[HistoryEntry]) -> UpstreamPrompt {
    let user = format!(
        "Position (FEN): {fen}\nMoves so far: {}\nReply with your move.",
        format_history(history)
    );

    UpstreamPrompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}
