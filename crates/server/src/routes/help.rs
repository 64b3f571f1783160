pub const USAGE: &str = "\
POST /ai-move
  Body: {\"fen\": \"<FEN string>\", \"history\": [{\"from\": \"e2\", \"to\": \"e4\"}, ...]}
  fen is required, history may be empty.

Responses:
  200 {\"move\": \"e2e4\"}                 move parsed from the model reply
  200 {\"move\": null, \"raw\": \"...\"}     model replied but no move was found
  400 <text>                             fen missing or body malformed
  500 <text>                             upstream error or empty reply

Moves use UCI notation (e2e4, e7e8q). Legality is not checked.
";

/// GET /help
pub async fn help() -> &'static str {
    USAGE
}
