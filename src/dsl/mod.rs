//! Reader and writer for OpenDSS text models.
//!
//! OpenDSS scripts are line-oriented and case-insensitive. This module reads
//! the subset where every attribute is written as `key=value`, keeping the
//! records in file order so they can be written back out.
//!
//! # Grammar Overview
//!
//! ```text
//! file         = { line }
//! line         = [ record ] [ comment ]
//! continuation = '~' { attribute }
//! record       = command { attribute }
//! comment      = '!' { any_char }
//! attribute    = key '=' value
//!
//! command      = token
//! key          = token without '='
//! value        = token without '=', may be empty
//! token        = non-whitespace { non-whitespace }
//! ```
//!
//! A continuation line is appended to the nearest preceding non-blank line.
//!
//! # Example
//!
//! ```text
//! ! IEEE 37 excerpt
//! clear
//! new object=circuit.ieee37 basekv=230
//! new object=line.l1 bus1=701.1.2.3 bus2=702.1.2.3
//! ~ linecode=721 length=0.96
//! setbusxy bus=701 x=10 y=20
//! ```

mod ast;
mod emitter;
mod joiner;
mod lexer;

pub use ast::*;
pub use emitter::{tree_to_dss, write_file};
pub use joiner::{join_lines, LogicalLine};
pub use lexer::{lex_line, lex_lines, tokens, Token};

use crate::config::SyntaxConfig;
use crate::error::{DssError, Result};

/// Parse DSS text into a record tree using the default syntax.
pub fn parse(input: &str) -> Result<DssTree> {
    parse_with(input, &SyntaxConfig::default())
}

/// Parse DSS text into a record tree.
pub fn parse_with(input: &str, config: &SyntaxConfig) -> Result<DssTree> {
    let lines = join_lines(input, config);
    let tree = lex_lines(&lines)?;
    tracing::debug!(lines = lines.len(), records = tree.len(), "parsed dss text");
    Ok(tree)
}

/// Parse a DSS file.
pub fn parse_file(path: &std::path::Path) -> Result<DssTree> {
    parse_file_with(path, &SyntaxConfig::default())
}

/// Parse a DSS file with a custom syntax.
pub fn parse_file_with(path: &std::path::Path, config: &SyntaxConfig) -> Result<DssTree> {
    let content = std::fs::read_to_string(path).map_err(|e| DssError::io(path, e))?;
    parse_with(&content, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comment_stripping() {
        let with_comment = parse("new object=line.l1 bus1=a bus2=b ! comment").unwrap();
        let without = parse("new object=line.l1 bus1=a bus2=b").unwrap();
        assert_eq!(with_comment, without);
    }

    #[test]
    fn test_comment_stripping_positional_fails_identically() {
        let a = parse("new line.l1 bus1=a bus2=b ! comment").unwrap_err();
        let b = parse("new line.l1 bus1=a bus2=b").unwrap_err();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_continuation() {
        let joined = parse("new object=line.l1 bus1=a\n~ bus2=b").unwrap();
        let single = parse("new object=line.l1 bus1=a bus2=b").unwrap();
        assert_eq!(joined, single);
        assert_eq!(joined.len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let tree = parse("SetBusXY Bus=N1 X=10 Y=20").unwrap();
        assert_eq!(
            tree.get(0).unwrap(),
            &Record::new("setbusxy").with("bus", "n1").with("x", "10").with("y", "20")
        );
    }

    #[test]
    fn test_error_line_is_original() {
        let err = parse("clear\n\n! note\nnew object=line.l1 oops").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error encountered in group (space delimited) #3 of line 4: \"oops\""
        );
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("nope.dss")).unwrap_err();
        match err {
            DssError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.dss");
        std::fs::write(&path, "Clear\nSolve mode=snap\n").unwrap();
        let tree = parse_file(&path).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(1).unwrap().get("mode"), Some("snap"));
    }
}
