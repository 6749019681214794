//! WASM bindings for dss_tree.
//!
//! Lets the browser-side feeder viewer convert DSS text without a server
//! round-trip.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { dss_to_json } from 'dss_tree';
//!
//! await init();
//!
//! const tree = JSON.parse(dss_to_json(`
//!   new object=line.l1 bus1=701.1 bus2=702.1
//!   setbusxy bus=701 x=10 y=20
//! `));
//! ```

use wasm_bindgen::prelude::*;

use crate::{dsl, lift};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Parse DSS text and return the lifted tree as JSON.
#[wasm_bindgen]
pub fn dss_to_json(dss: &str) -> Result<String, JsValue> {
    let tree = dsl::parse(dss).map_err(to_js)?;
    let lifted = lift::lift(&tree).map_err(to_js)?;
    lift::to_json_string(&lifted).map_err(to_js)
}

/// Parse DSS text and emit it in normalized one-record-per-line form.
#[wasm_bindgen]
pub fn dss_roundtrip(dss: &str) -> Result<String, JsValue> {
    let tree = dsl::parse(dss).map_err(to_js)?;
    Ok(dsl::tree_to_dss(&tree))
}

fn to_js(err: crate::DssError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
