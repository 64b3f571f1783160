use regex::Regex;
use std::sync::LazyLock;

/// Two coordinate pairs, an optional hyphen between them, an optional promotion piece.
/// The piece letter only counts when it ends the word, so `e2e4because` is `e2e4`.
static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([a-h][1-8])-?([a-h][1-8])(?:([qrbn])\b)?").expect("move pattern is valid")
});

/// Find the first UCI-looking move in a model reply.
///
/// The token comes back compacted (`e7-e8Q` -> `e7e8Q`) with its case untouched.
/// Returns `None` when nothing matches; legality is never checked.
pub fn extract_move(reply: &str) -> Option<String> {
    let caps = MOVE_RE.captures(reply.trim())?;

    let mut token = String::with_capacity(5);
    token.push_str(&caps[1]);
    token.push_str(&caps[2]);
    if let Some(promo) = caps.get(3) {
        token.push_str(promo.as_str());
    }
    Some(token)
}
