//! GLM-style writer for lifted trees.
//!
//! The feeder visualizer reads GridLAB-D object blocks, so each converted
//! node becomes one `object <type> { ... };` block in id order.

use std::fmt::Write as _;
use std::path::Path;

use super::types::LiftedTree;
use crate::error::{DssError, Result};

/// Render converted nodes as GLM object blocks.
pub fn tree_to_glm(tree: &LiftedTree) -> String {
    let mut out = String::new();
    for (_, node) in tree.nodes() {
        let props = node.properties();
        // `object` always comes first and may be overridden by passthrough.
        let object = props.first().map_or(node.object(), |(_, v)| *v);
        let _ = writeln!(out, "object {} {{", object);
        for (key, value) in props.iter().skip(1) {
            let _ = writeln!(out, "\t{} {};", key, value);
        }
        out.push_str("};\n");
    }
    out
}

/// Render and write a GLM file.
pub fn write_glm(tree: &LiftedTree, path: &Path) -> Result<()> {
    std::fs::write(path, tree_to_glm(tree)).map_err(|e| DssError::io(path, e))
}
