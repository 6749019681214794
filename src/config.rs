//! Syntax configuration for the DSS reader.

use serde::{Deserialize, Serialize};

/// Default comment marker.
pub const COMMENT_MARKER: char = '!';

/// Default continuation marker.
pub const CONTINUATION_MARKER: char = '~';

/// Markers and normalization used when joining raw DSS lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Everything from this character to end of line is discarded
    pub comment_marker: char,
    /// A line starting with this character continues the previous line
    pub continuation_marker: char,
    /// Lower-case the input (OpenDSS is case-insensitive)
    pub lowercase: bool,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            comment_marker: COMMENT_MARKER,
            continuation_marker: CONTINUATION_MARKER,
            lowercase: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: SyntaxConfig = serde_json::from_str(r#"{"comment_marker": "/"}"#).unwrap();
        assert_eq!(cfg.comment_marker, '/');
        assert_eq!(cfg.continuation_marker, '~');
        assert!(cfg.lowercase);
    }
}
