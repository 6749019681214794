//! Lexer turning logical lines into records.

use super::ast::{DssTree, Record};
use super::joiner::LogicalLine;
use crate::error::{DssError, Result};

/// A whitespace-separated token of a logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token's text
    pub text: &'a str,
    /// Position in the line (1-indexed, the command tag is 1)
    pub group: usize,
}

impl<'a> Token<'a> {
    /// Split into `(key, value)` if the token holds exactly one `=`.
    pub fn assignment(&self) -> Option<(&'a str, &'a str)> {
        let (key, value) = self.text.split_once('=')?;
        if value.contains('=') {
            return None;
        }
        Some((key, value))
    }
}

/// Iterate the tokens of one logical line.
pub fn tokens(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split_whitespace()
        .enumerate()
        .map(|(idx, text)| Token {
            text,
            group: idx + 1,
        })
}

/// Lex one logical line into a record.
///
/// The first token is the command tag; every other token must be a single
/// `key=value` assignment.
pub fn lex_line(line: &LogicalLine) -> Result<Record> {
    let mut toks = tokens(&line.text);

    let command = toks
        .next()
        .ok_or_else(|| DssError::malformed_attribute(line.line, 1, ""))?;

    let mut record = Record::at_line(command.text, line.line);
    for tok in toks {
        let (key, value) = tok
            .assignment()
            .ok_or_else(|| DssError::malformed_attribute(line.line, tok.group, tok.text))?;
        record.set(key, value);
    }

    Ok(record)
}

/// Lex every logical line, stopping at the first error.
pub fn lex_lines(lines: &[LogicalLine]) -> Result<DssTree> {
    lines.iter().map(lex_line).collect::<Result<Vec<_>>>().map(DssTree::from)
}
