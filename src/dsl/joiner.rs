//! Line joiner: comment removal, case folding and `~` continuations.

use crate::config::SyntaxConfig;

/// A cleaned, non-blank logical line with its original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Line number of the first physical line (1-indexed)
    pub line: usize,
    /// Cleaned text, continuations already appended
    pub text: String,
}

/// Reduce raw DSS text to its logical lines.
///
/// Continuation lines are appended to the nearest preceding non-blank line
/// with every continuation marker replaced by a space. A continuation with
/// nothing before it is kept as-is.
pub fn join_lines(input: &str, config: &SyntaxConfig) -> Vec<LogicalLine> {
    let mut out: Vec<LogicalLine> = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let folded;
        let raw = if config.lowercase {
            folded = raw.to_lowercase();
            folded.as_str()
        } else {
            raw
        };

        let text = match raw.find(config.comment_marker) {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();

        if text.is_empty() {
            continue;
        }

        if text.starts_with(config.continuation_marker) {
            if let Some(prev) = out.last_mut() {
                let marker = config.continuation_marker.to_string();
                prev.text.push_str(&text.replace(&marker, " "));
                continue;
            }
        }

        out.push(LogicalLine {
            line: idx + 1,
            text: text.to_string(),
        });
    }

    out
}
