//! Shape dispatch from DSS records to lifted nodes.

use super::types::{Attributes, LiftId, LiftOutcome, LiftedNode, LiftedTree};
use crate::dsl::{DssTree, Record};
use crate::error::{DssError, Result};

/// Command that places a bus on the map.
pub const SETBUSXY: &str = "setbusxy";

/// Command that declares a new object.
pub const NEW: &str = "new";

/// Lift a whole record tree.
///
/// Ids run from 1 and advance once per record, converted or not.
pub fn lift(tree: &DssTree) -> Result<LiftedTree> {
    let mut lifted = LiftedTree::new();
    for (idx, record) in tree.iter().enumerate() {
        let id = LiftId(idx + 1);
        let outcome = lift_record(record)?;
        if let LiftOutcome::Unconverted { reason, line, .. } = &outcome {
            tracing::warn!(%id, line, reason = %reason, record = %record, "record not converted");
        }
        lifted.push(id, outcome);
    }
    tracing::debug!(
        records = tree.len(),
        converted = lifted.nodes().count(),
        "lifted dss tree"
    );
    Ok(lifted)
}

/// Lift a single record.
///
/// Fails only when a matched shape lacks a field it needs.
pub fn lift_record(record: &Record) -> Result<LiftOutcome> {
    match record.command.as_str() {
        SETBUSXY => lift_bus_coords(record).map(LiftOutcome::Converted),
        NEW => lift_new_object(record),
        _ => Ok(LiftOutcome::Converted(LiftedNode::Command {
            command: record.command.clone(),
            extra: passthrough(record, &[]),
        })),
    }
}

fn lift_bus_coords(record: &Record) -> Result<LiftedNode> {
    Ok(LiftedNode::Node {
        name: required(record, "bus")?.to_string(),
        latitude: required(record, "y")?.to_string(),
        longitude: required(record, "x")?.to_string(),
        extra: passthrough(record, &["bus", "x", "y"]),
    })
}

fn lift_new_object(record: &Record) -> Result<LiftOutcome> {
    let object = required(record, "object")?;
    let (object_type, name) = object.split_once('.').ok_or_else(|| {
        DssError::malformed_field(
            &record.command,
            "object",
            record.line,
            format!("expected <type>.<name>, got {:?}", object),
        )
    })?;
    let object_type = object_type.to_string();
    let name = name.to_string();

    let node = if let (Some(bus1), Some(bus2)) = (record.get("bus1"), record.get("bus2")) {
        LiftedNode::LineLike {
            object_type,
            name,
            from: strip_terminals(bus1).to_string(),
            to: strip_terminals(bus2).to_string(),
            extra: passthrough(record, &["object", "bus1", "bus2"]),
        }
    } else if let Some(buses) = record.get("buses") {
        let list = split_bus_list(buses);
        if list.len() < 2 {
            return Ok(LiftOutcome::Unconverted {
                command: record.command.clone(),
                line: record.line,
                reason: format!("buses list {:?} has fewer than two entries", buses),
            });
        }
        LiftedNode::TransformerLike {
            object_type,
            name,
            from: list[0].to_string(),
            to: list[1].to_string(),
            extra: passthrough(record, &["object", "buses"]),
        }
    } else if let Some(bus) = record.get("bus") {
        LiftedNode::LoadLike {
            object_type,
            name,
            parent: bus.to_string(),
            extra: passthrough(record, &["object", "bus"]),
        }
    } else {
        LiftedNode::Generic {
            object_type,
            name,
            extra: passthrough(record, &["object"]),
        }
    };

    Ok(LiftOutcome::Converted(node))
}

fn required<'a>(record: &'a Record, field: &str) -> Result<&'a str> {
    record
        .get(field)
        .ok_or_else(|| DssError::missing_field(&record.command, field, record.line))
}

/// Copy every attribute not consumed by the shape.
fn passthrough(record: &Record, consumed: &[&str]) -> Attributes {
    record
        .attributes()
        .filter(|(key, _)| !consumed.contains(key))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Drop phase/terminal suffixes: `701.1.2.3` becomes `701`.
pub fn strip_terminals(bus: &str) -> &str {
    bus.split_once('.').map_or(bus, |(name, _)| name)
}

/// Split a `(a,b,...)` bus list into its non-empty entries.
pub fn split_bus_list(buses: &str) -> Vec<&str> {
    buses
        .trim_matches(|c| matches!(c, '(' | ')' | '[' | ']' | '"' | '\''))
        .split(',')
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::parse;
    use pretty_assertions::assert_eq;

    fn converted(record: &Record) -> LiftedNode {
        match lift_record(record).unwrap() {
            LiftOutcome::Converted(node) => node,
            other => panic!("expected a node, got {other:?}"),
        }
    }

    #[test]
    fn test_line_like() {
        let rec = Record::new("new")
            .with("object", "line.l1")
            .with("bus1", "a.1")
            .with("bus2", "b.1");
        let node = converted(&rec);
        assert_eq!(
            node.properties(),
            vec![("object", "line"), ("name", "l1"), ("from", "a"), ("to", "b")]
        );
    }

    #[test]
    fn test_node() {
        let rec = Record::new("setbusxy")
            .with("bus", "n1")
            .with("x", "10")
            .with("y", "20");
        let node = converted(&rec);
        assert_eq!(
            node.properties(),
            vec![
                ("object", "node"),
                ("name", "n1"),
                ("latitude", "20"),
                ("longitude", "10"),
            ]
        );
    }

    #[test]
    fn test_setbusxy_missing_coordinate() {
        let rec = Record::new("setbusxy").with("bus", "n1").with("x", "10");
        let err = lift_record(&rec).unwrap_err();
        assert!(matches!(err, DssError::MissingField { ref field, .. } if field == "y"));
    }

    #[test]
    fn test_endpoint_without_dot_kept_whole() {
        assert_eq!(strip_terminals("sourcebus"), "sourcebus");
    }

    #[test]
    fn test_multi_dot_endpoint_cut_at_first_dot() {
        assert_eq!(strip_terminals("701.1.2.3"), "701");
        assert_eq!(strip_terminals(".1"), "");
    }

    #[test]
    fn test_transformer_like() {
        let rec = Record::new("new")
            .with("object", "transformer.t1")
            .with("buses", "(799,709,710)")
            .with("kvas", "(500,500)");
        let node = converted(&rec);
        assert_eq!(node.endpoints(), Some(("799", "709")));
        assert_eq!(node.extra(), &vec![("kvas".to_string(), "(500,500)".to_string())]);
        assert!(matches!(node, LiftedNode::TransformerLike { .. }));
    }

    #[test]
    fn test_transformer_with_one_bus_is_unconverted() {
        let rec = Record::new("new")
            .with("object", "transformer.t1")
            .with("buses", "(799)");
        let outcome = lift_record(&rec).unwrap();
        assert!(matches!(outcome, LiftOutcome::Unconverted { .. }));
    }

    #[test]
    fn test_load_like() {
        let rec = Record::new("new")
            .with("object", "load.s701a")
            .with("bus", "701.1.2")
            .with("kw", "140");
        let node = converted(&rec);
        assert_eq!(
            node,
            LiftedNode::LoadLike {
                object_type: "load".into(),
                name: "s701a".into(),
                parent: "701.1.2".into(),
                extra: vec![("kw".into(), "140".into())],
            }
        );
    }

    #[test]
    fn test_generic_config() {
        let rec = Record::new("new")
            .with("object", "linecode.721")
            .with("nphases", "3");
        let node = converted(&rec);
        assert_eq!(
            node.properties(),
            vec![("object", "linecode"), ("name", "721"), ("nphases", "3")]
        );
    }

    #[test]
    fn test_bus1_alone_is_generic() {
        let rec = Record::new("new")
            .with("object", "vsource.src")
            .with("bus1", "sourcebus");
        let node = converted(&rec);
        assert!(matches!(node, LiftedNode::Generic { .. }));
        assert_eq!(node.extra(), &vec![("bus1".to_string(), "sourcebus".to_string())]);
    }

    #[test]
    fn test_new_without_dotted_object_fails() {
        let rec = Record::new("new").with("object", "line").with("phases", "3");
        assert!(matches!(
            lift_record(&rec).unwrap_err(),
            DssError::MalformedField { .. }
        ));

        let rec = Record::new("new").with("phases", "3");
        assert!(matches!(
            lift_record(&rec).unwrap_err(),
            DssError::MissingField { ref field, .. } if field == "object"
        ));
    }

    #[test]
    fn test_other_commands_always_succeed() {
        for text in ["solve", "set voltagebases=[230,4.8]", "edit x=1", "calcvoltagebases"] {
            let tree = parse(text).unwrap();
            let node = converted(tree.get(0).unwrap());
            assert_eq!(node.object(), "!CMD");
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let tree = parse(
            "clear\n\
             new object=transformer.bad buses=(x)\n\
             new object=line.l1 bus1=a bus2=b\n\
             solve",
        )
        .unwrap();
        let lifted = lift(&tree).unwrap();
        let ids: Vec<usize> = lifted.entries().iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let converted: Vec<usize> = lifted.nodes().map(|(id, _)| id.0).collect();
        assert_eq!(converted, vec![1, 3, 4]);
        assert_eq!(lift(&tree).unwrap(), lifted);
    }

    #[test]
    fn test_lift_error_aborts() {
        let tree = parse("clear\nnew phases=3").unwrap();
        assert!(lift(&tree).is_err());
    }
}
