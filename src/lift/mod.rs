//! Lossy lifting of DSS record trees into node/edge form.
//!
//! This module turns a parsed [`DssTree`](crate::dsl::DssTree) into a
//! [`LiftedTree`] for quick visualization: bus coordinates become nodes,
//! two-terminal and multi-winding elements become edges, single-terminal
//! elements hang off a parent bus, and everything else is kept as a
//! generic object or command. It is best-effort and not a source of truth.

mod builder;
mod glm;
mod types;

pub use builder::{lift, lift_record, split_bus_list, strip_terminals, NEW, SETBUSXY};
pub use glm::{tree_to_glm, write_glm};
pub use types::*;

use std::path::Path;

use crate::error::{DssError, Result};

/// Serialize a lifted tree as pretty-printed JSON keyed by id.
pub fn to_json_string(tree: &LiftedTree) -> Result<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Serialize a lifted tree and write it to `path`.
pub fn write_json(tree: &LiftedTree, path: &Path) -> Result<()> {
    let json = to_json_string(tree)?;
    std::fs::write(path, json).map_err(|e| DssError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_keys_follow_id_order() {
        let mut input = String::new();
        for i in 0..11 {
            input.push_str(&format!("setbusxy bus=b{i} x={i} y=0\n"));
        }
        let lifted = lift(&parse(&input).unwrap()).unwrap();
        let json = to_json_string(&lifted).unwrap();
        let pos_2 = json.find("\"2\"").unwrap();
        let pos_10 = json.find("\"10\"").unwrap();
        assert!(pos_2 < pos_10);
    }

    #[test]
    fn test_json_document() {
        let tree = parse(
            "new object=line.l1 bus1=a.1 bus2=b.1\n\
             new object=transformer.t buses=(q)\n\
             solve mode=snap",
        )
        .unwrap();
        let lifted = lift(&tree).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&to_json_string(&lifted).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "1": {"object": "line", "name": "l1", "from": "a", "to": "b"},
                "3": {"object": "!CMD", "name": "solve", "mode": "snap"}
            })
        );
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        let lifted = lift(&parse("clear").unwrap()).unwrap();
        write_json(&lifted, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"1\""));
    }
}
