use std::sync::LazyLock;

use regex::Regex;

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<think>.*?</think>").unwrap());

/// Removes `<think>...</think>` reasoning blocks some models emit before the
/// answer. Matching is case-insensitive and spans newlines; an unclosed tag
/// is left untouched.
pub fn strip_think_blocks(raw: &str) -> String {
    THINK_BLOCK.replace_all(raw, "").trim().to_string()
}
