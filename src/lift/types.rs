//! Core types for lifted trees.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Object category used for bus coordinate nodes.
pub const NODE_OBJECT: &str = "node";

/// Object category used for plain commands.
pub const COMMAND_OBJECT: &str = "!CMD";

/// Attributes copied through from the source record, in record order.
pub type Attributes = Vec<(String, String)>;

/// Sequential identifier of a lifted entry. The first record gets 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LiftId(pub usize);

impl fmt::Display for LiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record lifted into a visualization-friendly shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiftedNode {
    /// Bus coordinates from `setbusxy`
    Node {
        name: String,
        latitude: String,
        longitude: String,
        extra: Attributes,
    },
    /// Two-terminal element with `bus1`/`bus2`
    LineLike {
        object_type: String,
        name: String,
        from: String,
        to: String,
        extra: Attributes,
    },
    /// Multi-winding element with a `buses` list
    TransformerLike {
        object_type: String,
        name: String,
        from: String,
        to: String,
        extra: Attributes,
    },
    /// Single-terminal element attached to one `bus`
    LoadLike {
        object_type: String,
        name: String,
        parent: String,
        extra: Attributes,
    },
    /// Object without connectivity (line codes, circuits, curves...)
    Generic {
        object_type: String,
        name: String,
        extra: Attributes,
    },
    /// Any command other than `new`/`setbusxy`
    Command { command: String, extra: Attributes },
}

impl LiftedNode {
    /// The `object` category written out for this node.
    pub fn object(&self) -> &str {
        match self {
            Self::Node { .. } => NODE_OBJECT,
            Self::LineLike { object_type, .. }
            | Self::TransformerLike { object_type, .. }
            | Self::LoadLike { object_type, .. }
            | Self::Generic { object_type, .. } => object_type,
            Self::Command { .. } => COMMAND_OBJECT,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Node { name, .. }
            | Self::LineLike { name, .. }
            | Self::TransformerLike { name, .. }
            | Self::LoadLike { name, .. }
            | Self::Generic { name, .. } => name,
            Self::Command { command, .. } => command,
        }
    }

    /// Passthrough attributes.
    pub fn extra(&self) -> &Attributes {
        match self {
            Self::Node { extra, .. }
            | Self::LineLike { extra, .. }
            | Self::TransformerLike { extra, .. }
            | Self::LoadLike { extra, .. }
            | Self::Generic { extra, .. }
            | Self::Command { extra, .. } => extra,
        }
    }

    /// Endpoints for edge-like nodes.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        match self {
            Self::LineLike { from, to, .. } | Self::TransformerLike { from, to, .. } => {
                Some((from.as_str(), to.as_str()))
            }
            _ => None,
        }
    }

    /// Flattened key/value view: `object`, `name`, connectivity fields, then
    /// passthrough attributes. A passthrough key that repeats an earlier key
    /// replaces its value in place.
    pub fn properties(&self) -> Vec<(&str, &str)> {
        let mut props = vec![("object", self.object()), ("name", self.name())];
        match self {
            Self::Node {
                latitude,
                longitude,
                ..
            } => {
                props.push(("latitude", latitude.as_str()));
                props.push(("longitude", longitude.as_str()));
            }
            Self::LineLike { from, to, .. } | Self::TransformerLike { from, to, .. } => {
                props.push(("from", from.as_str()));
                props.push(("to", to.as_str()));
            }
            Self::LoadLike { parent, .. } => props.push(("parent", parent.as_str())),
            Self::Generic { .. } | Self::Command { .. } => {}
        }

        for (key, value) in self.extra() {
            match props.iter_mut().find(|(k, _)| *k == key.as_str()) {
                Some(slot) => slot.1 = value.as_str(),
                None => props.push((key.as_str(), value.as_str())),
            }
        }
        props
    }
}

impl Serialize for LiftedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let props = self.properties();
        let mut map = serializer.serialize_map(Some(props.len()))?;
        for (key, value) in props {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Result of lifting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiftOutcome {
    Converted(LiftedNode),
    /// The record matched no shape; nothing is emitted for its id
    Unconverted {
        command: String,
        line: usize,
        reason: String,
    },
}

impl LiftOutcome {
    pub fn node(&self) -> Option<&LiftedNode> {
        match self {
            Self::Converted(node) => Some(node),
            Self::Unconverted { .. } => None,
        }
    }
}

/// Lifted entries keyed by [`LiftId`], in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiftedTree {
    entries: Vec<(LiftId, LiftOutcome)>,
}

impl LiftedTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Ids must be pushed in increasing order.
    pub fn push(&mut self, id: LiftId, outcome: LiftOutcome) {
        debug_assert!(self.entries.last().map_or(true, |(last, _)| *last < id));
        self.entries.push((id, outcome));
    }

    /// Number of entries, converted or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(LiftId, LiftOutcome)] {
        &self.entries
    }

    /// Look up a converted node by id.
    pub fn get(&self, id: LiftId) -> Option<&LiftedNode> {
        self.entries
            .binary_search_by_key(&id, |(entry_id, _)| *entry_id)
            .ok()
            .and_then(|idx| self.entries[idx].1.node())
    }

    /// Converted nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (LiftId, &LiftedNode)> {
        self.entries
            .iter()
            .filter_map(|(id, outcome)| outcome.node().map(|node| (*id, node)))
    }

    /// Entries that were not converted.
    pub fn unconverted(&self) -> impl Iterator<Item = (LiftId, &LiftOutcome)> {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.node().is_none())
            .map(|(id, outcome)| (*id, outcome))
    }
}

impl Serialize for LiftedTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (id, node) in self.nodes() {
            map.serialize_entry(&id.to_string(), node)?;
        }
        map.end()
    }
}
