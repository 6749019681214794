//! Emitter writing a record tree back to DSS text.
//!
//! Output is one record per line. Comments and continuation layout are not
//! reconstructed; re-parsing the output yields an equal [`DssTree`].

use std::fmt::Write as _;
use std::path::Path;

use super::ast::DssTree;
use crate::error::{DssError, Result};

/// Serialize a tree to DSS text.
pub fn tree_to_dss(tree: &DssTree) -> String {
    let mut out = String::new();
    for record in tree {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", record);
    }
    out
}

/// Serialize a tree and write it to `path`.
pub fn write_file(tree: &DssTree, path: &Path) -> Result<()> {
    std::fs::write(path, tree_to_dss(tree)).map_err(|e| DssError::io(path, e))?;
    tracing::debug!(path = %path.display(), records = tree.len(), "wrote dss file");
    Ok(())
}
