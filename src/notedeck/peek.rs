//! # Peek Formatting
//!
//! Turns the raw bytes of a note file into the text shown to the user.
//! Content is decoded, trimmed, and cut down to a line and character budget.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LINES: usize = 25;
pub const DEFAULT_MAX_CHARS: usize = 800;
pub const ELLIPSIS: char = '…';

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLimits {
    pub max_lines: usize,
    pub max_chars: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PeekResult {
    pub text: String,
    pub is_truncated: bool,
}

/// Decodes note bytes as UTF-8 (which also covers plain ASCII files).
///
/// Returns `None` when the bytes are not valid text.
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes).ok().map(str::to_string)
}

/// Formats decoded note content for display.
///
/// Rules:
/// 1. Leading and trailing whitespace is trimmed.
/// 2. At most `max_lines` lines are kept.
/// 3. The re-joined text is capped at `max_chars` characters.
/// 4. If either cut happened, an ellipsis is appended unless one is already there.
pub fn format_as_peek(raw_content: &str, limits: DisplayLimits) -> PeekResult {
    let trimmed = raw_content.trim();
    let mut is_truncated = false;

    // 1. Line budget
    let mut lines: Vec<&str> = trimmed.lines().collect();
    if lines.len() > limits.max_lines {
        lines.truncate(limits.max_lines);
        is_truncated = true;
    }
    let mut text = lines.join("\n");

    // 2. Character budget
    if let Some((cut, _)) = text.char_indices().nth(limits.max_chars) {
        text.truncate(cut);
        is_truncated = true;
    }

    if is_truncated {
        let kept = text.trim_end().len();
        text.truncate(kept);
        if !text.ends_with(ELLIPSIS) {
            text.push(ELLIPSIS);
        }
    }

    PeekResult { text, is_truncated }
}
