//! # dss_tree
//!
//! Reader, writer and visualization lifter for OpenDSS text models.
//!
//! This library provides:
//! - A line joiner handling `!` comments and `~` continuations
//! - A lexer producing ordered `key=value` records
//! - An emitter that writes records back as DSS text
//! - A lossy lifter producing a node/edge tree for feeder visualization
//!
//! ## Architecture
//!
//! - [`dsl`] - Parsing and emitting DSS text
//! - [`lift`] - Record-to-node lifting, JSON and GLM output
//! - [`config`] - Syntax markers used by the reader
//! - [`error`] - Error type shared by all stages
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! dss lift ieee37.dss -o ieee37.json --glm ieee37.glm
//! dss roundtrip ieee37.dss -o ieee37_clean.dss
//! ```
//!
//! ### Library
//!
//! ```
//! let tree = dss_tree::dsl::parse("new object=line.l1 bus1=a.1 bus2=b.1").unwrap();
//! let lifted = dss_tree::lift::lift(&tree).unwrap();
//! let json = dss_tree::lift::to_json_string(&lifted).unwrap();
//! assert!(json.contains("\"from\": \"a\""));
//! ```

pub mod config;
pub mod dsl;
pub mod error;
pub mod lift;

// Re-export main types for convenience
pub use config::SyntaxConfig;
pub use dsl::{DssTree, Record};
pub use error::{DssError, Result};
pub use lift::{LiftedNode, LiftedTree};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{dss_roundtrip, dss_to_json};
